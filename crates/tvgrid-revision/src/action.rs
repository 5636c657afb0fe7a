//! # Revision Actions
//!
//! Corrective commands executed when a program fails a restriction. Split and
//! merge create programs through the notifying `ProgramFactory`; replace
//! builds its program silently; a day change only touches the program itself.
//!
//! ## Grid effects
//!
//! | action | removes | adds | notifies |
//! |---|---|---|---|
//! | split | the original | two halves | yes, per half |
//! | replace | the original | default show | no |
//! | merge | the program and its successor | merged program | yes |
//! | change day | nothing | nothing | no |
//!
//! New programs are appended at the end of the grid.
//!
//! ## Sponsor aliasing
//!
//! Both halves of a split share the original's `SponsorList`, and a merged
//! program shares the list of whichever side the coin picked. Adding a
//! sponsor to one of them shows up in the others.

use serde::{Deserialize, Serialize};
use tvgrid_core::{
    Grid, InsufficientDataError, Presenter, ProgramDraft, ProgramHandle, ProgramId,
    ReviewConfig, RevisionError, Weekday,
};
use tvgrid_notify::ProgramFactory;

use crate::choice::ChoiceSource;

/// Title of the second half of a split when the original has a single word.
pub const UNNAMED_PROGRAM_TITLE: &str = "Programa sin nombre";

/// Suffix appended to the first word of a split program's title.
const ON_AIR_SUFFIX: &str = "en el aire!";

// ---------------------------------------------------------------------------
// ActionContext / ActionEffect
// ---------------------------------------------------------------------------

/// What an action may touch besides the program it was called for.
pub struct ActionContext<'a> {
    pub grid: &'a mut Grid,
    pub factory: &'a ProgramFactory,
    pub chooser: &'a mut dyn ChoiceSource,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        factory: &'a ProgramFactory,
        chooser: &'a mut dyn ChoiceSource,
    ) -> Self {
        Self {
            grid,
            factory,
            chooser,
        }
    }

    /// Create through the factory (observers run first), then append to the grid.
    fn schedule_new(&mut self, draft: ProgramDraft) -> ProgramHandle {
        let handle = self.factory.create(draft, self.grid);
        self.grid.add(handle.clone());
        handle
    }
}

/// A condition worth surfacing that did not stop the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionWarning {
    /// A merge found no other program in the grid and merged the program
    /// with itself: its first presenter appears twice and its duration doubles.
    SelfMerge { program: ProgramId },
}

/// Grid changes made by one action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEffect {
    /// Programs added to the grid, in insertion order.
    pub created: Vec<ProgramId>,
    /// Programs removed from the grid.
    pub removed: Vec<ProgramId>,
    pub warnings: Vec<ActionWarning>,
}

impl ActionEffect {
    /// Whether the grid membership changed.
    pub fn changed_grid(&self) -> bool {
        !self.created.is_empty() || !self.removed.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RevisionAction
// ---------------------------------------------------------------------------

/// A corrective command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevisionAction {
    /// Split the program's presenters, budget, and duration into two programs.
    SplitProgram,
    /// Swap the program for a silently created default show.
    ReplaceWithDefaultShow { title: String },
    /// Merge the program with the one scheduled after it.
    MergePrograms { titles: [String; 2] },
    /// Move the program to another day.
    ChangeDay { day: Weekday },
}

impl RevisionAction {
    pub fn split() -> Self {
        Self::SplitProgram
    }

    /// Replacement titled after `config.default_show_title`.
    pub fn replace_with_default_show(config: &ReviewConfig) -> Self {
        Self::ReplaceWithDefaultShow {
            title: config.default_show_title.clone(),
        }
    }

    /// Merge choosing between `config.merge_titles`.
    pub fn merge(config: &ReviewConfig) -> Self {
        Self::MergePrograms {
            titles: config.merge_titles.clone(),
        }
    }

    pub fn change_day(day: Weekday) -> Self {
        Self::ChangeDay { day }
    }

    /// Stable name for logs and audit records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SplitProgram => "split_program",
            Self::ReplaceWithDefaultShow { .. } => "replace_with_default_show",
            Self::MergePrograms { .. } => "merge_programs",
            Self::ChangeDay { .. } => "change_day",
        }
    }

    /// Apply the action to `program`.
    ///
    /// Fails without touching the grid when the program lacks the data the
    /// action needs.
    pub fn execute(
        &self,
        program: &ProgramHandle,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionEffect, RevisionError> {
        match self {
            Self::SplitProgram => split_program(program, ctx),
            Self::ReplaceWithDefaultShow { title } => Ok(replace_program(program, title, ctx)),
            Self::MergePrograms { titles } => merge_programs(program, titles, ctx),
            Self::ChangeDay { day } => {
                program.borrow_mut().day = *day;
                Ok(ActionEffect::default())
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_program(
    program: &ProgramHandle,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionEffect, RevisionError> {
    let (first_half, second_half) = {
        let original = program.borrow();
        if original.presenters.is_empty() {
            return Err(InsufficientDataError::NoPresenters {
                title: original.title.clone(),
                operation: "split",
            }
            .into());
        }

        let words = original.title_words();
        let first_word = words
            .first()
            .ok_or(InsufficientDataError::EmptyTitle { operation: "split" })?;
        let first_title = format!("{first_word} {ON_AIR_SUFFIX}");
        let second_title = words
            .get(1)
            .map(|word| capitalize(word))
            .unwrap_or_else(|| UNNAMED_PROGRAM_TITLE.to_string());

        let (head, tail) = original.presenters.split_at(original.presenters.len() / 2);
        let half = |title: String, presenters: &[Presenter]| {
            ProgramDraft::new(title, original.day)
                .with_presenters(presenters.to_vec())
                .with_budget(original.budget / 2)
                .with_duration(original.duration / 2)
                .with_sponsors(original.sponsors.clone())
        };
        (half(first_title, head), half(second_title, tail))
    };

    // The second half is scheduled first, so it precedes the on-air half.
    let mut effect = ActionEffect::default();
    effect.created.push(ctx.schedule_new(second_half).id());
    effect.created.push(ctx.schedule_new(first_half).id());
    if ctx.grid.remove(program) {
        effect.removed.push(program.id());
    }

    tracing::info!(
        program = %program.id(),
        created = ?effect.created,
        "split program"
    );
    Ok(effect)
}

fn replace_program(
    program: &ProgramHandle,
    title: &str,
    ctx: &mut ActionContext<'_>,
) -> ActionEffect {
    let replacement = {
        let original = program.borrow();
        ProgramDraft::new(title, original.day)
            .with_duration(original.duration)
            .build()
    };
    let replacement = ProgramHandle::new(replacement);

    let mut effect = ActionEffect::default();
    if ctx.grid.remove(program) {
        effect.removed.push(program.id());
    }
    effect.created.push(replacement.id());
    ctx.grid.add(replacement);

    tracing::info!(program = %program.id(), replacement = %title, "replaced program");
    effect
}

fn merge_programs(
    program: &ProgramHandle,
    titles: &[String; 2],
    ctx: &mut ActionContext<'_>,
) -> Result<ActionEffect, RevisionError> {
    let partner = ctx
        .grid
        .successor(program)
        .cloned()
        .ok_or(RevisionError::NotInGrid {
            program: program.id(),
        })?;

    let mut effect = ActionEffect::default();
    let self_merge = partner.ptr_eq(program);
    if self_merge {
        tracing::warn!(
            program = %program.id(),
            "merge found no other program in the grid; merging program with itself"
        );
        effect.warnings.push(ActionWarning::SelfMerge {
            program: program.id(),
        });
    }

    let merged = {
        let a = program.borrow();
        let b = partner.borrow();
        let presenters = vec![
            a.first_presenter("merge")?.clone(),
            b.first_presenter("merge")?.clone(),
        ];
        let sponsors = if ctx.chooser.choose_first() {
            a.sponsors.clone()
        } else {
            b.sponsors.clone()
        };
        let title = if ctx.chooser.choose_first() {
            titles[0].clone()
        } else {
            titles[1].clone()
        };
        ProgramDraft::new(title, a.day)
            .with_presenters(presenters)
            .with_budget(a.budget.min(b.budget))
            .with_sponsors(sponsors)
            .with_duration(a.duration.saturating_add(b.duration))
    };

    for side in [program, &partner] {
        if ctx.grid.remove(side) {
            effect.removed.push(side.id());
        }
    }
    effect.created.push(ctx.schedule_new(merged).id());

    tracing::info!(
        program = %program.id(),
        partner = %partner.id(),
        created = ?effect.created,
        "merged programs"
    );
    Ok(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::{FixedChoice, ScriptedChoice};
    use std::rc::Rc;
    use tvgrid_core::SponsorList;
    use tvgrid_notify::{NotificationRegistry, RecordingMailer};

    fn presenters(names: &[&str]) -> Vec<Presenter> {
        names
            .iter()
            .map(|n| Presenter::new(*n, format!("{}@canal.tv", n.to_lowercase())))
            .collect()
    }

    fn schedule(grid: &mut Grid, draft: ProgramDraft) -> ProgramHandle {
        let handle = ProgramHandle::new(draft.build());
        grid.add(handle.clone());
        handle
    }

    fn run(
        action: &RevisionAction,
        program: &ProgramHandle,
        grid: &mut Grid,
        factory: &ProgramFactory,
        chooser: &mut dyn ChoiceSource,
    ) -> Result<ActionEffect, RevisionError> {
        let mut ctx = ActionContext::new(grid, factory, chooser);
        action.execute(program, &mut ctx)
    }

    #[test]
    fn split_halves_program() {
        let mut grid = Grid::new();
        let sponsors: SponsorList = ["Acme"].into_iter().collect();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("Noche Loca", Weekday::Fri)
                .with_presenters(presenters(&["P1", "P2", "P3", "P4"]))
                .with_budget(1000)
                .with_duration(60)
                .with_sponsors(sponsors.clone()),
        );

        let effect = run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(effect.created.len(), 2);
        assert_eq!(effect.removed, vec![original.id()]);
        assert_eq!(grid.titles(), vec!["Loca", "Noche en el aire!"]);
        assert_eq!(effect.created, vec![grid.get(0).unwrap().id(), grid.get(1).unwrap().id()]);

        let second = grid.get(0).unwrap().borrow();
        let on_air = grid.get(1).unwrap().borrow();
        assert_eq!(on_air.presenters, presenters(&["P1", "P2"]));
        assert_eq!(second.presenters, presenters(&["P3", "P4"]));
        for half in [&on_air, &second] {
            assert_eq!(half.budget, 500);
            assert_eq!(half.duration, 30);
            assert_eq!(half.day, Weekday::Fri);
            assert!(half.sponsors.shares_with(&sponsors));
        }
    }

    #[test]
    fn split_odd_presenters_gives_extra_to_second_half() {
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("Noche Loca", Weekday::Fri)
                .with_presenters(presenters(&["P1", "P2", "P3"]))
                .with_budget(1001)
                .with_duration(45),
        );

        run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(grid.get(0).unwrap().borrow().presenters.len(), 2);
        assert_eq!(grid.get(1).unwrap().borrow().presenters.len(), 1);
        assert_eq!(grid.get(0).unwrap().borrow().budget, 500);
        assert_eq!(grid.get(1).unwrap().borrow().duration, 22);
    }

    #[test]
    fn split_single_word_single_presenter() {
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("Matutino", Weekday::Mon).with_presenters(presenters(&["P1"])),
        );

        run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(grid.titles(), vec![UNNAMED_PROGRAM_TITLE, "Matutino en el aire!"]);
        assert_eq!(grid.get(0).unwrap().borrow().presenters, presenters(&["P1"]));
        assert!(grid.get(1).unwrap().borrow().presenters.is_empty());
    }

    #[test]
    fn split_capitalizes_second_word() {
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("noche loca total", Weekday::Mon)
                .with_presenters(presenters(&["P1", "P2"])),
        );
        run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();
        assert_eq!(grid.titles(), vec!["Loca", "noche en el aire!"]);
    }

    #[test]
    fn split_without_presenters_fails_and_leaves_grid() {
        let mut grid = Grid::new();
        let original = schedule(&mut grid, ProgramDraft::new("Noche Loca", Weekday::Mon));

        let err = run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RevisionError::InsufficientData(InsufficientDataError::NoPresenters { .. })
        ));
        assert_eq!(grid.len(), 1);
        assert!(grid.contains(&original));
    }

    #[test]
    fn split_with_blank_title_fails() {
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("   ", Weekday::Mon).with_presenters(presenters(&["P1"])),
        );
        let err = run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RevisionError::InsufficientData(InsufficientDataError::EmptyTitle { .. })
        ));
    }

    #[test]
    fn split_notifies_each_half() {
        let mailer = Rc::new(RecordingMailer::new());
        let factory = ProgramFactory::new(NotificationRegistry::standard(
            mailer.clone(),
            &ReviewConfig::default(),
        ));
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("Noche Loca", Weekday::Fri)
                .with_presenters(presenters(&["Ana", "Beto"])),
        );

        run(
            &RevisionAction::split(),
            &original,
            &mut grid,
            &factory,
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(mailer.sent_to("ana@canal.tv").len(), 1);
        assert_eq!(mailer.sent_to("beto@canal.tv").len(), 1);
        assert!(mailer.sent_to("ana@canal.tv")[0].content.contains("Noche en el aire!"));
        assert!(mailer.sent_to("beto@canal.tv")[0].content.contains("Loca"));

        let recipients: Vec<String> = mailer.sent().into_iter().map(|m| m.to).collect();
        assert_eq!(recipients, vec!["beto@canal.tv", "ana@canal.tv"]);
    }

    #[test]
    fn merge_after_split_pairs_second_half_with_on_air_half() {
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("Noche Loca", Weekday::Fri)
                .with_presenters(presenters(&["Ana", "Beto"]))
                .with_budget(1000),
        );
        let factory = ProgramFactory::silent();
        run(&RevisionAction::split(), &original, &mut grid, &factory, &mut FixedChoice(true))
            .unwrap();

        let second = grid.get(0).unwrap().clone();
        run(
            &RevisionAction::merge(&ReviewConfig::default()),
            &second,
            &mut grid,
            &factory,
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(grid.len(), 1);
        let merged = grid.get(0).unwrap().borrow();
        assert_eq!(merged.presenters, presenters(&["Beto", "Ana"]));
        assert_eq!(merged.duration, 30);
    }

    #[test]
    fn replace_keeps_day_and_duration_and_is_silent() {
        let mailer = Rc::new(RecordingMailer::new());
        let factory = ProgramFactory::new(NotificationRegistry::standard(
            mailer.clone(),
            &ReviewConfig::default(),
        ));
        let mut grid = Grid::new();
        let original = schedule(
            &mut grid,
            ProgramDraft::new("Noche Loca", Weekday::Sat)
                .with_presenters(presenters(&["Ana"]))
                .with_budget(500_000)
                .with_duration(90),
        );

        let effect = run(
            &RevisionAction::replace_with_default_show(&ReviewConfig::default()),
            &original,
            &mut grid,
            &factory,
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(effect.removed, vec![original.id()]);
        assert_eq!(grid.titles(), vec!["Los Simpson"]);
        let replacement = grid.get(0).unwrap().borrow();
        assert_eq!(replacement.day, Weekday::Sat);
        assert_eq!(replacement.duration, 90);
        assert_eq!(replacement.budget, tvgrid_core::DEFAULT_BUDGET);
        assert!(replacement.presenters.is_empty());
        assert!(replacement.sponsors.is_empty());
        assert!(mailer.is_empty());
    }

    #[test]
    fn merge_takes_min_budget_and_sum_of_durations() {
        let mut grid = Grid::new();
        let a = schedule(
            &mut grid,
            ProgramDraft::new("A", Weekday::Tue)
                .with_presenters(presenters(&["Ana", "Ale"]))
                .with_budget(200)
                .with_duration(30),
        );
        let b = schedule(
            &mut grid,
            ProgramDraft::new("B", Weekday::Wed)
                .with_presenters(presenters(&["Beto", "Bruno"]))
                .with_budget(500)
                .with_duration(45),
        );

        let effect = run(
            &RevisionAction::merge(&ReviewConfig::default()),
            &a,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(effect.removed, vec![a.id(), b.id()]);
        assert!(effect.warnings.is_empty());
        assert_eq!(grid.len(), 1);
        assert!(!grid.contains(&a));
        assert!(!grid.contains(&b));

        let merged = grid.get(0).unwrap().borrow();
        assert_eq!(merged.budget, 200);
        assert_eq!(merged.duration, 75);
        assert_eq!(merged.day, Weekday::Tue);
        assert_eq!(merged.presenters, presenters(&["Ana", "Beto"]));
        assert_eq!(merged.title, "Impacto Total");
    }

    #[test]
    fn merge_choices_pick_sponsors_and_title() {
        let build = |grid: &mut Grid| {
            let a = schedule(
                grid,
                ProgramDraft::new("A", Weekday::Tue)
                    .with_presenters(presenters(&["Ana"]))
                    .with_sponsors(["Acme"].into_iter().collect()),
            );
            let b = schedule(
                grid,
                ProgramDraft::new("B", Weekday::Wed)
                    .with_presenters(presenters(&["Beto"]))
                    .with_sponsors(["Globex"].into_iter().collect()),
            );
            (a, b)
        };
        let config = ReviewConfig::default();

        let mut grid = Grid::new();
        let (a, _) = build(&mut grid);
        let a_sponsors = a.borrow().sponsors.clone();
        run(
            &RevisionAction::merge(&config),
            &a,
            &mut grid,
            &ProgramFactory::silent(),
            &mut ScriptedChoice::new([true, false]),
        )
        .unwrap();
        let merged = grid.get(0).unwrap().borrow();
        assert!(merged.sponsors.shares_with(&a_sponsors));
        assert_eq!(merged.title, "Buen Dia");
        drop(merged);

        let mut grid = Grid::new();
        let (a, b) = build(&mut grid);
        let b_sponsors = b.borrow().sponsors.clone();
        run(
            &RevisionAction::merge(&config),
            &a,
            &mut grid,
            &ProgramFactory::silent(),
            &mut ScriptedChoice::new([false, true]),
        )
        .unwrap();
        let merged = grid.get(0).unwrap().borrow();
        assert!(merged.sponsors.shares_with(&b_sponsors));
        assert_eq!(merged.title, "Impacto Total");
    }

    #[test]
    fn merge_last_program_wraps_to_first() {
        let mut grid = Grid::new();
        let first = schedule(
            &mut grid,
            ProgramDraft::new("Primero", Weekday::Mon).with_presenters(presenters(&["Ana"])),
        );
        let middle = schedule(
            &mut grid,
            ProgramDraft::new("Medio", Weekday::Mon).with_presenters(presenters(&["Beto"])),
        );
        let last = schedule(
            &mut grid,
            ProgramDraft::new("Ultimo", Weekday::Thu).with_presenters(presenters(&["Carla"])),
        );

        run(
            &RevisionAction::merge(&ReviewConfig::default()),
            &last,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();

        assert!(grid.contains(&middle));
        assert!(!grid.contains(&first));
        assert!(!grid.contains(&last));
        let merged = grid.get(1).unwrap().borrow();
        assert_eq!(merged.presenters, presenters(&["Carla", "Ana"]));
        assert_eq!(merged.day, Weekday::Thu);
    }

    #[test]
    fn merge_in_single_program_grid_is_a_flagged_self_merge() {
        let mut grid = Grid::new();
        let only = schedule(
            &mut grid,
            ProgramDraft::new("Solo", Weekday::Mon)
                .with_presenters(presenters(&["Ana", "Beto"]))
                .with_budget(300)
                .with_duration(40),
        );

        let effect = run(
            &RevisionAction::merge(&ReviewConfig::default()),
            &only,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap();

        assert_eq!(effect.warnings, vec![ActionWarning::SelfMerge { program: only.id() }]);
        assert_eq!(effect.removed, vec![only.id()]);
        assert_eq!(grid.len(), 1);
        let merged = grid.get(0).unwrap().borrow();
        assert_eq!(merged.presenters, presenters(&["Ana", "Ana"]));
        assert_eq!(merged.budget, 300);
        assert_eq!(merged.duration, 80);
    }

    #[test]
    fn merge_with_unhosted_partner_fails_and_leaves_grid() {
        let mut grid = Grid::new();
        let a = schedule(
            &mut grid,
            ProgramDraft::new("A", Weekday::Mon).with_presenters(presenters(&["Ana"])),
        );
        schedule(&mut grid, ProgramDraft::new("B", Weekday::Mon));

        let err = run(
            &RevisionAction::merge(&ReviewConfig::default()),
            &a,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap_err();

        match err {
            RevisionError::InsufficientData(InsufficientDataError::NoPresenters {
                title, ..
            }) => assert_eq!(title, "B"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(grid.titles(), vec!["A", "B"]);
    }

    #[test]
    fn merge_of_unscheduled_program_fails() {
        let mut grid = Grid::new();
        let stray = ProgramHandle::new(
            ProgramDraft::new("Suelto", Weekday::Mon)
                .with_presenters(presenters(&["Ana"]))
                .build(),
        );
        let err = run(
            &RevisionAction::merge(&ReviewConfig::default()),
            &stray,
            &mut grid,
            &ProgramFactory::silent(),
            &mut FixedChoice(true),
        )
        .unwrap_err();
        assert_eq!(err, RevisionError::NotInGrid { program: stray.id() });
    }

    #[test]
    fn change_day_mutates_in_place() {
        let mailer = Rc::new(RecordingMailer::new());
        let factory = ProgramFactory::new(NotificationRegistry::standard(
            mailer.clone(),
            &ReviewConfig::default(),
        ));
        let mut grid = Grid::new();
        let program = schedule(
            &mut grid,
            ProgramDraft::new("Noche Loca", Weekday::Mon).with_presenters(presenters(&["Ana"])),
        );

        let effect = run(
            &RevisionAction::change_day(Weekday::Sun),
            &program,
            &mut grid,
            &factory,
            &mut FixedChoice(true),
        )
        .unwrap();

        assert!(!effect.changed_grid());
        assert_eq!(program.borrow().day, Weekday::Sun);
        assert_eq!(grid.len(), 1);
        assert!(mailer.is_empty());
    }

    #[test]
    fn capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize("ñandu"), "Ñandu");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn action_kinds() {
        let config = ReviewConfig::default();
        assert_eq!(RevisionAction::split().kind(), "split_program");
        assert_eq!(RevisionAction::merge(&config).kind(), "merge_programs");
        assert_eq!(
            RevisionAction::replace_with_default_show(&config).kind(),
            "replace_with_default_show"
        );
        assert_eq!(RevisionAction::change_day(Weekday::Mon).kind(), "change_day");
    }
}
