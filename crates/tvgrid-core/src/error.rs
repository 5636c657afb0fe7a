//! # Error Hierarchy
//!
//! Structured error types for grid revision, built with `thiserror`.
//!
//! Empty-collection access is the only failure class of the engine itself:
//! averaging no ratings, taking the first presenter of an unhosted program, or
//! reading words from a blank title. These carry the title of the program and
//! the operation that needed the data so that a failed revision pass can be
//! diagnosed from its report alone.

use thiserror::Error;

use crate::identity::ProgramId;

/// Top-level error type for revision actions and restriction evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevisionError {
    /// An operation needed data the program does not have.
    #[error("insufficient data: {0}")]
    InsufficientData(#[from] InsufficientDataError),

    /// An action that relies on grid position was given a program the grid
    /// does not contain.
    #[error("{program} is not scheduled in the grid")]
    NotInGrid {
        /// The program that was looked up.
        program: ProgramId,
    },
}

/// A computation over an empty collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsufficientDataError {
    /// Rolling rating average requested for a program with no ratings.
    #[error("program \"{title}\" has no ratings to average")]
    NoRatings {
        /// Title of the program.
        title: String,
    },

    /// An operation needed at least one presenter.
    #[error("program \"{title}\" has no presenters ({operation})")]
    NoPresenters {
        /// Title of the program.
        title: String,
        /// The operation that needed a presenter.
        operation: &'static str,
    },

    /// An operation needed at least one word in the title.
    #[error("program title is blank ({operation})")]
    EmptyTitle {
        /// The operation that needed a title word.
        operation: &'static str,
    },
}

/// Errors while loading or validating a `ReviewConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A field holds a value the engine cannot work with.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
