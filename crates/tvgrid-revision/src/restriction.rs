//! # Restrictions
//!
//! Qualifying conditions a program must meet to stay on the grid as it is.
//! Evaluation is pure and re-run on every pass; nothing is cached.
//!
//! `All` is true for an empty child list and `Any` is false for one, the
//! usual identities of conjunction and disjunction. Composites evaluate their
//! children left to right and stop at the first child that decides the result.

use serde::{Deserialize, Serialize};
use tvgrid_core::{Program, RevisionError};

/// A boolean predicate over a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Restriction {
    /// Rolling rating average strictly above `threshold`.
    MinimumAverageRating { threshold: f64 },
    /// At least `count` presenters.
    MinimumPresenterCount { count: usize },
    /// Some presenter is named exactly `name`.
    HostedBy { name: String },
    /// Budget at most `limit`.
    MaximumBudget { limit: u64 },
    /// Every child holds.
    All { restrictions: Vec<Restriction> },
    /// At least one child holds.
    Any { restrictions: Vec<Restriction> },
}

impl Restriction {
    pub fn minimum_average_rating(threshold: f64) -> Self {
        Self::MinimumAverageRating { threshold }
    }

    pub fn minimum_presenter_count(count: usize) -> Self {
        Self::MinimumPresenterCount { count }
    }

    pub fn hosted_by(name: impl Into<String>) -> Self {
        Self::HostedBy { name: name.into() }
    }

    pub fn maximum_budget(limit: u64) -> Self {
        Self::MaximumBudget { limit }
    }

    pub fn all(restrictions: Vec<Restriction>) -> Self {
        Self::All { restrictions }
    }

    pub fn any(restrictions: Vec<Restriction>) -> Self {
        Self::Any { restrictions }
    }

    /// Evaluate against `program`.
    ///
    /// Fails only when an average rating is required of a program without
    /// ratings. A composite propagates the first child error it reaches.
    pub fn satisfies(&self, program: &Program) -> Result<bool, RevisionError> {
        match self {
            Self::MinimumAverageRating { threshold } => {
                Ok(program.rolling_average()? > *threshold)
            }
            Self::MinimumPresenterCount { count } => Ok(program.presenters.len() >= *count),
            Self::HostedBy { name } => Ok(program.hosted_by(name)),
            Self::MaximumBudget { limit } => Ok(program.budget <= *limit),
            Self::All { restrictions } => {
                for restriction in restrictions {
                    if !restriction.satisfies(program)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Any { restrictions } => {
                for restriction in restrictions {
                    if restriction.satisfies(program)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn write_composite(
    f: &mut std::fmt::Formatter<'_>,
    op: &str,
    children: &[Restriction],
) -> std::fmt::Result {
    write!(f, "{op}(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinimumAverageRating { threshold } => write!(f, "average rating > {threshold}"),
            Self::MinimumPresenterCount { count } => write!(f, "presenters >= {count}"),
            Self::HostedBy { name } => write!(f, "hosted by \"{name}\""),
            Self::MaximumBudget { limit } => write!(f, "budget <= {limit}"),
            Self::All { restrictions } => write_composite(f, "all", restrictions),
            Self::Any { restrictions } => write_composite(f, "any", restrictions),
        }
    }
}
