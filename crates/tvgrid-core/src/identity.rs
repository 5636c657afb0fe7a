//! # Program Identifiers
//!
//! `ProgramId` labels a program in logs and audit records. Grid membership is
//! decided by handle identity, so the id never participates in equality of
//! programs themselves.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scheduled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub Uuid);

impl ProgramId {
    /// Generate a new random program identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProgramId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "program:{}", self.0)
    }
}
