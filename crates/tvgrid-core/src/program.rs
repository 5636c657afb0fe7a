//! # Program Model
//!
//! A `Program` is a mutable schedule slot. Programs enter the schedule through
//! a `ProgramDraft`, either silently via `ProgramDraft::build()` or through the
//! notifying factory in `tvgrid-notify`, and are then shared as
//! `ProgramHandle`s between the grid and the revision process.
//!
//! ## Aliasing
//!
//! `SponsorList` is reference counted. Cloning it does NOT copy the sponsors:
//! both clones observe every later `push` or `remove`. Programs produced by a
//! split share the original's list on purpose. Use `detached()` when an
//! independent copy is wanted.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::InsufficientDataError;
use crate::identity::ProgramId;

/// Number of most recent ratings considered by the rolling average.
pub const ROLLING_WINDOW: usize = 5;

/// Budget given to programs built without an explicit one.
pub const DEFAULT_BUDGET: u64 = 10_000;

/// Duration in minutes given to programs built without an explicit one.
pub const DEFAULT_DURATION: u32 = 30;

// ---------------------------------------------------------------------------
// Presenter / Rating
// ---------------------------------------------------------------------------

/// A program host. The name is the identity used by "hosted by" checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Presenter {
    /// Display name.
    pub name: String,
    /// Mail address used for creation notifications.
    pub mail: String,
}

impl Presenter {
    /// A presenter with the given name and mail address.
    pub fn new(name: impl Into<String>, mail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mail: mail.into(),
        }
    }
}

/// A single audience rating of one edition of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Audience score.
    pub score: i32,
    /// Air date of the rated edition.
    pub date: NaiveDate,
}

impl Rating {
    /// A rating of `score` for the edition aired on `date`.
    pub fn new(score: i32, date: NaiveDate) -> Self {
        Self { score, date }
    }
}

// ---------------------------------------------------------------------------
// SponsorList
// ---------------------------------------------------------------------------

/// An ordered, shared, mutable sequence of sponsor names.
///
/// `Clone` aliases the underlying storage. See the module docs.
#[derive(Clone, Default)]
pub struct SponsorList(Rc<RefCell<Vec<String>>>);

impl SponsorList {
    /// Create a list owning the given sponsors.
    pub fn new(sponsors: Vec<String>) -> Self {
        Self(Rc::new(RefCell::new(sponsors)))
    }

    /// Append a sponsor. Visible through every alias of this list.
    pub fn push(&self, sponsor: impl Into<String>) {
        self.0.borrow_mut().push(sponsor.into());
    }

    /// Remove the first sponsor with the given name. Returns whether one was removed.
    pub fn remove(&self, sponsor: &str) -> bool {
        let mut sponsors = self.0.borrow_mut();
        match sponsors.iter().position(|s| s == sponsor) {
            Some(index) => {
                sponsors.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `sponsor` is in the list.
    pub fn contains(&self, sponsor: &str) -> bool {
        self.0.borrow().iter().any(|s| s == sponsor)
    }

    /// Number of sponsors.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the list has no sponsors.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the current sponsors.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Whether `self` and `other` are the same underlying list.
    pub fn shares_with(&self, other: &SponsorList) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// An independent copy that no longer aliases `self`.
    pub fn detached(&self) -> Self {
        Self::new(self.to_vec())
    }
}

impl<S: Into<String>> FromIterator<S> for SponsorList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Debug for SponsorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_borrow() {
            Ok(sponsors) => f.debug_list().entries(sponsors.iter()).finish(),
            Err(_) => f.write_str("SponsorList(<borrowed>)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// A schedule slot under revision.
///
/// Deliberately not `Clone`: a copy would carry the same id and silently
/// alias the sponsor list.
#[derive(Debug)]
pub struct Program {
    id: ProgramId,
    /// Editorial title.
    pub title: String,
    /// Ordered; duplicates allowed.
    pub presenters: Vec<Presenter>,
    /// Production budget.
    pub budget: u64,
    /// Possibly shared with other programs.
    pub sponsors: SponsorList,
    /// Broadcast day.
    pub day: Weekday,
    /// Minutes.
    pub duration: u32,
    /// Audience ratings in recording order.
    pub ratings: Vec<Rating>,
}

impl Program {
    /// Identifier used in logs and audit records.
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Average score of the `ROLLING_WINDOW` most recent ratings by date.
    ///
    /// The order in which ratings were recorded does not matter. Fewer than
    /// `ROLLING_WINDOW` ratings are averaged as they are.
    pub fn rolling_average(&self) -> Result<f64, InsufficientDataError> {
        if self.ratings.is_empty() {
            return Err(InsufficientDataError::NoRatings {
                title: self.title.clone(),
            });
        }

        let mut by_date: Vec<&Rating> = self.ratings.iter().collect();
        by_date.sort_by_key(|r| r.date);

        let recent = &by_date[by_date.len().saturating_sub(ROLLING_WINDOW)..];
        let total: i64 = recent.iter().map(|r| i64::from(r.score)).sum();
        Ok(total as f64 / recent.len() as f64)
    }

    /// Whether any presenter's name equals `name` exactly.
    pub fn hosted_by(&self, name: &str) -> bool {
        self.presenters.iter().any(|p| p.name == name)
    }

    /// Mail addresses of the presenters, in order.
    pub fn presenter_mails(&self) -> Vec<&str> {
        self.presenters.iter().map(|p| p.mail.as_str()).collect()
    }

    /// The first presenter, required by operations that pick a representative host.
    pub fn first_presenter(
        &self,
        operation: &'static str,
    ) -> Result<&Presenter, InsufficientDataError> {
        self.presenters
            .first()
            .ok_or_else(|| InsufficientDataError::NoPresenters {
                title: self.title.clone(),
                operation,
            })
    }

    /// Title split on whitespace, empty pieces dropped.
    pub fn title_words(&self) -> Vec<&str> {
        self.title.split_whitespace().collect()
    }
}

// ---------------------------------------------------------------------------
// ProgramDraft
// ---------------------------------------------------------------------------

/// Attributes of a program that has not entered the schedule yet.
#[derive(Debug)]
pub struct ProgramDraft {
    /// Editorial title.
    pub title: String,
    /// Ordered presenters.
    pub presenters: Vec<Presenter>,
    /// Production budget.
    pub budget: u64,
    /// Sponsor list, aliased into the built program.
    pub sponsors: SponsorList,
    /// Broadcast day.
    pub day: Weekday,
    /// Minutes.
    pub duration: u32,
    /// Audience ratings.
    pub ratings: Vec<Rating>,
}

impl ProgramDraft {
    /// A draft with default budget and duration, no presenters, no ratings,
    /// and a fresh empty sponsor list.
    pub fn new(title: impl Into<String>, day: Weekday) -> Self {
        Self {
            title: title.into(),
            presenters: Vec::new(),
            budget: DEFAULT_BUDGET,
            sponsors: SponsorList::default(),
            day,
            duration: DEFAULT_DURATION,
            ratings: Vec::new(),
        }
    }

    /// Replace the presenters.
    pub fn with_presenters(mut self, presenters: Vec<Presenter>) -> Self {
        self.presenters = presenters;
        self
    }

    /// Append one presenter.
    pub fn with_presenter(mut self, presenter: Presenter) -> Self {
        self.presenters.push(presenter);
        self
    }

    /// Set the budget.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Use `sponsors` as the program's list. Aliases, does not copy.
    pub fn with_sponsors(mut self, sponsors: SponsorList) -> Self {
        self.sponsors = sponsors;
        self
    }

    /// Set the duration in minutes.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Append one rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.ratings.push(rating);
        self
    }

    /// Construct the program with a fresh id. No observer is notified.
    pub fn build(self) -> Program {
        Program {
            id: ProgramId::new(),
            title: self.title,
            presenters: self.presenters,
            budget: self.budget,
            sponsors: self.sponsors,
            day: self.day,
            duration: self.duration,
            ratings: self.ratings,
        }
    }
}

// ---------------------------------------------------------------------------
// ProgramHandle
// ---------------------------------------------------------------------------

/// Shared reference to a scheduled program.
///
/// Equality is identity: two handles are equal only when they point at the
/// same program.
#[derive(Clone)]
pub struct ProgramHandle(Rc<RefCell<Program>>);

impl ProgramHandle {
    /// Wrap a program for sharing between the grid and the revision process.
    pub fn new(program: Program) -> Self {
        Self(Rc::new(RefCell::new(program)))
    }

    /// Immutable access. Panics if the program is mutably borrowed, which
    /// the single-threaded engine never does across calls.
    pub fn borrow(&self) -> Ref<'_, Program> {
        self.0.borrow()
    }

    /// Mutable access. Panics if the program is already borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Program> {
        self.0.borrow_mut()
    }

    /// Id of the program behind the handle.
    pub fn id(&self) -> ProgramId {
        self.0.borrow().id
    }

    /// Copy of the current title.
    pub fn title(&self) -> String {
        self.0.borrow().title.clone()
    }

    /// Whether both handles point at the same program.
    pub fn ptr_eq(&self, other: &ProgramHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Program> for ProgramHandle {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}

impl PartialEq for ProgramHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ProgramHandle {}

impl std::fmt::Debug for ProgramHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_borrow() {
            Ok(program) => f
                .debug_struct("ProgramHandle")
                .field("id", &program.id)
                .field("title", &program.title)
                .finish(),
            Err(_) => f.write_str("ProgramHandle(<borrowed>)"),
        }
    }
}
