//! # Revision Process
//!
//! Holds an ordered list of `(Restriction, RevisionAction)` conditions and the
//! programs under observation.
//!
//! ## Dispatch
//!
//! For each tracked program, `review_all` walks the condition list in the
//! order conditions were added and runs the action paired with the FIRST
//! restriction the program does not satisfy. At most one action runs per
//! program per pass; a program satisfying every restriction is left alone.
//! Registration order is the only tie-break.
//!
//! ## Tracking
//!
//! Tracked programs are handles into the grid, not owners. Replace, split,
//! and merge remove programs from the grid without telling the process, so
//! after a pass the tracked set may name programs that are gone. Such
//! programs are reported as `Skipped` until `prune_gone` drops them.
//! Programs created by actions are not tracked automatically.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tvgrid_core::{Grid, ProgramHandle, ProgramId, ReviewConfig, RevisionError};
use tvgrid_notify::ProgramFactory;

use crate::action::{ActionContext, ActionEffect, RevisionAction};
use crate::audit::{AuditEntry, AuditEntryType, AuditTrail};
use crate::choice::ChoiceSource;
use crate::restriction::Restriction;

// ---------------------------------------------------------------------------
// RevisionCondition
// ---------------------------------------------------------------------------

/// A restriction and the action to run when a program fails it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionCondition {
    pub restriction: Restriction,
    pub action: RevisionAction,
}

impl RevisionCondition {
    pub fn new(restriction: Restriction, action: RevisionAction) -> Self {
        Self {
            restriction,
            action,
        }
    }
}

// ---------------------------------------------------------------------------
// ReviewReport
// ---------------------------------------------------------------------------

/// What happened to one tracked program during a pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// Every restriction held.
    Compliant,
    /// The action of condition `condition_index` ran.
    Corrected {
        condition_index: usize,
        action: RevisionAction,
        effect: ActionEffect,
    },
    /// Evaluating condition `condition_index`, or running its action, failed.
    /// The grid is unchanged by this program.
    Failed {
        condition_index: usize,
        error: RevisionError,
    },
    /// The program is no longer in the grid and awaits pruning.
    Skipped,
}

/// Outcome for one tracked program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramReview {
    pub program: ProgramId,
    pub title: String,
    pub outcome: ReviewOutcome,
}

/// Result of one `review_all` pass, in tracked order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewReport {
    pub reviews: Vec<ProgramReview>,
    /// Programs dropped from tracking by `review_and_prune`.
    pub pruned: Vec<ProgramId>,
}

impl ReviewReport {
    pub fn outcome_for(&self, program: ProgramId) -> Option<&ReviewOutcome> {
        self.reviews
            .iter()
            .find(|r| r.program == program)
            .map(|r| &r.outcome)
    }

    /// Number of actions that ran.
    pub fn corrected_count(&self) -> usize {
        self.reviews
            .iter()
            .filter(|r| matches!(r.outcome, ReviewOutcome::Corrected { .. }))
            .count()
    }

    pub fn compliant_count(&self) -> usize {
        self.reviews
            .iter()
            .filter(|r| r.outcome == ReviewOutcome::Compliant)
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.reviews
            .iter()
            .filter(|r| r.outcome == ReviewOutcome::Skipped)
            .count()
    }

    /// Programs whose evaluation or action failed, with the error.
    pub fn failures(&self) -> Vec<(ProgramId, &RevisionError)> {
        self.reviews
            .iter()
            .filter_map(|r| match &r.outcome {
                ReviewOutcome::Failed { error, .. } => Some((r.program, error)),
                _ => None,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// RevisionProcess
// ---------------------------------------------------------------------------

/// First-failure-wins revision of tracked programs.
///
/// Not `Send`: programs are `Rc`-shared with the grid. A service running
/// several callers against one grid must serialize them.
pub struct RevisionProcess<C = StdRng> {
    conditions: Vec<RevisionCondition>,
    tracked: Vec<ProgramHandle>,
    factory: ProgramFactory,
    chooser: C,
    audit_trail: AuditTrail,
}

impl RevisionProcess<StdRng> {
    /// A process whose merges flip an entropy-seeded coin.
    pub fn new(factory: ProgramFactory) -> Self {
        Self::with_chooser(factory, StdRng::from_entropy())
    }

    /// A process whose merges are reproducible for a given seed.
    pub fn with_seed(factory: ProgramFactory, seed: u64) -> Self {
        Self::with_chooser(factory, StdRng::seed_from_u64(seed))
    }
}

impl<C: ChoiceSource> RevisionProcess<C> {
    pub fn with_chooser(factory: ProgramFactory, chooser: C) -> Self {
        Self {
            conditions: Vec::new(),
            tracked: Vec::new(),
            factory,
            chooser,
            audit_trail: AuditTrail::new(ReviewConfig::default().audit_capacity),
        }
    }

    /// Size the audit trail from `config`.
    pub fn with_config(mut self, config: &ReviewConfig) -> Self {
        self.audit_trail = AuditTrail::new(config.audit_capacity);
        self
    }

    /// Append a condition. Earlier conditions take precedence.
    pub fn add_condition(&mut self, restriction: Restriction, action: RevisionAction) {
        self.conditions.push(RevisionCondition::new(restriction, action));
    }

    pub fn conditions(&self) -> &[RevisionCondition] {
        &self.conditions
    }

    /// Start observing `program`. Returns `false` if it was already tracked.
    pub fn track(&mut self, program: ProgramHandle) -> bool {
        if self.is_tracking(&program) {
            return false;
        }
        self.tracked.push(program);
        true
    }

    /// Track every program currently in `grid`. Returns how many were added.
    pub fn track_all(&mut self, grid: &Grid) -> usize {
        let mut added = 0;
        for program in grid {
            if self.track(program.clone()) {
                added += 1;
            }
        }
        added
    }

    /// Stop observing `program`. Returns whether it was tracked.
    pub fn untrack(&mut self, program: &ProgramHandle) -> bool {
        let before = self.tracked.len();
        self.tracked.retain(|p| !p.ptr_eq(program));
        self.tracked.len() != before
    }

    pub fn is_tracking(&self, program: &ProgramHandle) -> bool {
        self.tracked.iter().any(|p| p.ptr_eq(program))
    }

    pub fn tracked(&self) -> &[ProgramHandle] {
        &self.tracked
    }

    pub fn factory(&self) -> &ProgramFactory {
        &self.factory
    }

    pub fn audit_trail(&self) -> &AuditTrail {
        &self.audit_trail
    }

    /// Review every tracked program once.
    ///
    /// A failure for one program is recorded in the report and does not stop
    /// the pass.
    pub fn review_all(&mut self, grid: &mut Grid) -> ReviewReport {
        let snapshot = self.tracked.clone();
        let mut report = ReviewReport::default();

        for program in &snapshot {
            let outcome = if grid.contains(program) {
                self.review_program(program, grid)
            } else {
                tracing::debug!(program = %program.id(), "tracked program left the grid; skipping");
                self.audit_trail.append(AuditEntry::new(
                    AuditEntryType::ProgramSkipped,
                    Some(program.id()),
                    None,
                ));
                ReviewOutcome::Skipped
            };
            report.reviews.push(ProgramReview {
                program: program.id(),
                title: program.title(),
                outcome,
            });
        }

        tracing::info!(
            reviewed = report.reviews.len(),
            corrected = report.corrected_count(),
            failed = report.failures().len(),
            skipped = report.skipped_count(),
            "revision pass complete"
        );
        report
    }

    /// Drop tracked programs that are no longer in `grid`. Returns their ids.
    pub fn prune_gone(&mut self, grid: &Grid) -> Vec<ProgramId> {
        let mut pruned = Vec::new();
        self.tracked.retain(|p| {
            let keep = grid.contains(p);
            if !keep {
                pruned.push(p.id());
            }
            keep
        });

        for id in &pruned {
            tracing::info!(program = %id, "pruned program no longer in the grid");
            self.audit_trail.append(AuditEntry::new(
                AuditEntryType::ProgramPruned,
                Some(*id),
                None,
            ));
        }
        pruned
    }

    /// `review_all` followed by `prune_gone`.
    pub fn review_and_prune(&mut self, grid: &mut Grid) -> ReviewReport {
        let mut report = self.review_all(grid);
        report.pruned = self.prune_gone(grid);
        report
    }

    fn review_program(&mut self, program: &ProgramHandle, grid: &mut Grid) -> ReviewOutcome {
        let program_id = program.id();

        // Find the first unmet condition. The borrow ends before any action runs.
        let first_failure = {
            let current = program.borrow();
            self.conditions
                .iter()
                .enumerate()
                .find_map(|(index, condition)| {
                    match condition.restriction.satisfies(&current) {
                        Ok(true) => None,
                        Ok(false) => Some(Ok(index)),
                        Err(error) => Some(Err((index, error))),
                    }
                })
        };

        self.audit_trail.append(AuditEntry::new(
            AuditEntryType::ProgramEvaluated,
            Some(program_id),
            Some(serde_json::json!({
                "conditions": self.conditions.len(),
                "first_unmet": first_failure.as_ref().map(|r| match r {
                    Ok(index) | Err((index, _)) => *index,
                }),
            })),
        ));

        let condition_index = match first_failure {
            None => {
                tracing::debug!(program = %program_id, "program meets every restriction");
                return ReviewOutcome::Compliant;
            }
            Some(Err((index, error))) => return self.record_failure(program_id, index, error),
            Some(Ok(index)) => index,
        };

        let condition = &self.conditions[condition_index];
        tracing::debug!(
            program = %program_id,
            condition = condition_index,
            restriction = %condition.restriction,
            action = condition.action.kind(),
            "restriction unmet"
        );

        let action = condition.action.clone();
        let result = {
            let mut ctx = ActionContext::new(grid, &self.factory, &mut self.chooser);
            action.execute(program, &mut ctx)
        };

        match result {
            Ok(effect) => {
                tracing::info!(
                    program = %program_id,
                    condition = condition_index,
                    action = action.kind(),
                    "corrective action executed"
                );
                self.audit_trail.append(AuditEntry::new(
                    AuditEntryType::ActionExecuted,
                    Some(program_id),
                    Some(serde_json::json!({
                        "condition_index": condition_index,
                        "action": action.kind(),
                        "created": effect.created,
                        "removed": effect.removed,
                        "warnings": effect.warnings,
                    })),
                ));
                ReviewOutcome::Corrected {
                    condition_index,
                    action,
                    effect,
                }
            }
            Err(error) => self.record_failure(program_id, condition_index, error),
        }
    }

    fn record_failure(
        &mut self,
        program_id: ProgramId,
        condition_index: usize,
        error: RevisionError,
    ) -> ReviewOutcome {
        tracing::warn!(
            program = %program_id,
            condition = condition_index,
            error = %error,
            "revision failed"
        );
        self.audit_trail.append(AuditEntry::new(
            AuditEntryType::ActionFailed,
            Some(program_id),
            Some(serde_json::json!({
                "condition_index": condition_index,
                "error": error.to_string(),
            })),
        ));
        ReviewOutcome::Failed {
            condition_index,
            error,
        }
    }
}

impl<C> std::fmt::Debug for RevisionProcess<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevisionProcess")
            .field("condition_count", &self.conditions.len())
            .field("tracked_count", &self.tracked.len())
            .field("audit_trail_size", &self.audit_trail.len())
            .finish()
    }
}
