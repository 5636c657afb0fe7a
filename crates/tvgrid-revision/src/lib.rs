//! # tvgrid-revision — Grid Revision Engine
//!
//! Periodic editorial review of a broadcast grid. A `RevisionProcess` holds an
//! ordered list of `(Restriction, RevisionAction)` conditions and a set of
//! tracked programs. Each pass checks every tracked program against the
//! conditions in order and runs the action of the first restriction it fails.
//!
//! ## Components
//!
//! - **Restriction** (`restriction.rs`): pure predicates over a program,
//!   composable with `All` / `Any`.
//! - **RevisionAction** (`action.rs`): corrective commands that reshape the
//!   grid (split, merge, replace) or reschedule a program in place.
//! - **RevisionProcess** (`process.rs`): first-failure-wins dispatch and
//!   pruning of programs that actions removed from the grid.
//! - **Choice** (`choice.rs`): injected source for the coin flips of a merge.
//! - **Audit** (`audit.rs`): bounded trail of evaluations and executions.
//!
//! ## Ownership
//!
//! The grid owns scheduled programs; the process only tracks handles to them.
//! Actions may remove tracked programs from the grid without telling the
//! process, so callers run `prune_gone` after a pass (or use
//! `review_and_prune`). Until then, stale programs are reported as skipped.

pub mod action;
pub mod audit;
pub mod choice;
pub mod process;
pub mod restriction;

// Re-export primary types.
pub use action::{
    ActionContext, ActionEffect, ActionWarning, RevisionAction, UNNAMED_PROGRAM_TITLE,
};
pub use audit::{AuditEntry, AuditEntryType, AuditTrail};
pub use choice::{ChoiceSource, FixedChoice, ScriptedChoice};
pub use process::{
    ProgramReview, ReviewOutcome, ReviewReport, RevisionCondition, RevisionProcess,
};
pub use restriction::Restriction;
