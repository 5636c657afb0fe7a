#![deny(missing_docs)]

//! # tvgrid-core — Foundational Types for Grid Revision
//!
//! Defines the schedule data model that the notification and revision crates
//! operate on. Every other crate in the workspace depends on `tvgrid-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Identity, not value.** A scheduled program is a `ProgramHandle`
//!    (`Rc<RefCell<Program>>`). Two handles are equal only when they point at
//!    the same program, so the grid and the revision process agree on
//!    membership even when two programs carry identical attributes.
//!
//! 2. **Explicit aliasing.** Sponsor sequences are `SponsorList` values that
//!    share storage when cloned. Programs produced by a split keep pointing at
//!    the original's list. Call `SponsorList::detached()` for an independent copy.
//!
//! 3. **Typed failures for empty data.** Averages over no ratings, the first
//!    presenter of a program without presenters, and the first word of a blank
//!    title all return `InsufficientDataError` instead of a NaN or a panic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tvgrid-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod grid;
pub mod identity;
pub mod program;

// Re-export primary types for ergonomic imports.
pub use config::ReviewConfig;
pub use error::{ConfigError, InsufficientDataError, RevisionError};
pub use grid::Grid;
pub use identity::ProgramId;
pub use program::{
    Presenter, Program, ProgramDraft, ProgramHandle, Rating, SponsorList, DEFAULT_BUDGET,
    DEFAULT_DURATION, ROLLING_WINDOW,
};

pub use chrono::Weekday;
