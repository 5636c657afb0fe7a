//! # Revision Audit Trail
//!
//! Records every evaluation, executed or failed action, skipped program, and
//! pruned program of a revision process, so an editor can reconstruct why the
//! grid looks the way it does after a pass.
//!
//! The trail is bounded: when it grows past its capacity the oldest 10% of
//! entries are dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tvgrid_core::ProgramId;

// ---------------------------------------------------------------------------
// AuditEntryType
// ---------------------------------------------------------------------------

/// The type of audit trail event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntryType {
    /// A tracked program was checked against the condition list.
    ProgramEvaluated,
    /// A corrective action ran to completion.
    ActionExecuted,
    /// A restriction or action failed for lack of data.
    ActionFailed,
    /// A tracked program was not in the grid and was not evaluated.
    ProgramSkipped,
    /// A tracked program was dropped after leaving the grid.
    ProgramPruned,
}

impl AuditEntryType {
    /// Return the string value for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProgramEvaluated => "program_evaluated",
            Self::ActionExecuted => "action_executed",
            Self::ActionFailed => "action_failed",
            Self::ProgramSkipped => "program_skipped",
            Self::ProgramPruned => "program_pruned",
        }
    }
}

impl std::fmt::Display for AuditEntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditEntry
// ---------------------------------------------------------------------------

/// A single entry in the revision audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub entry_type: AuditEntryType,
    /// UTC timestamp when the event occurred.
    pub timestamp: DateTime<Utc>,
    pub program_id: Option<ProgramId>,
    /// Optional structured metadata payload.
    pub metadata: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry with the current UTC timestamp.
    pub fn new(
        entry_type: AuditEntryType,
        program_id: Option<ProgramId>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self {
            entry_type,
            timestamp: Utc::now(),
            program_id,
            metadata,
        }
    }
}

impl PartialEq for AuditEntry {
    fn eq(&self, other: &Self) -> bool {
        self.entry_type == other.entry_type
            && self.program_id == other.program_id
            && self.metadata == other.metadata
    }
}

impl Eq for AuditEntry {}

// ---------------------------------------------------------------------------
// AuditTrail
// ---------------------------------------------------------------------------

/// An append-only audit trail with a configurable capacity.
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
    max_entries: usize,
}

impl AuditTrail {
    /// Create a new audit trail with the given maximum capacity.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Append an entry, trimming the oldest 10% when over capacity.
    pub fn append(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            let trim_count = (self.max_entries / 10).max(1);
            self.entries.drain(..trim_count);
        }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Return entries about a specific program.
    pub fn entries_for_program(&self, program_id: ProgramId) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.program_id == Some(program_id))
            .collect()
    }

    /// Return entries matching a specific event type.
    pub fn entries_by_type(&self, entry_type: AuditEntryType) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .collect()
    }
}

impl std::fmt::Debug for AuditTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditTrail")
            .field("len", &self.entries.len())
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
