//! # Review Configuration
//!
//! Addresses, thresholds, and fixed titles used by the notification observers
//! and the corrective actions. Every field has a default, so an empty YAML
//! document is a valid configuration.
//!
//! Restrictions and revision conditions are not part of this file; callers
//! assemble them in code.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables of the revision engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewConfig {
    /// Sender of every notification mail.
    pub mail_sender: String,
    /// Recipient of urgent sponsor-search requests.
    pub escalation_address: String,
    /// Budgets strictly above this amount trigger a sponsor search.
    pub escalation_threshold: u64,
    /// Title of the show that replaces a failing program.
    pub default_show_title: String,
    /// Candidate titles for a merged program.
    pub merge_titles: [String; 2],
    /// Maximum number of retained audit entries.
    pub audit_capacity: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            mail_sender: "programacion@canal.tv".to_string(),
            escalation_address: "sponsors@canal.tv".to_string(),
            escalation_threshold: 100_000,
            default_show_title: "Los Simpson".to_string(),
            merge_titles: ["Impacto Total".to_string(), "Buen Dia".to_string()],
            audit_capacity: 10_000,
        }
    }
}

impl ReviewConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ReviewConfig = if yaml.trim().is_empty() {
            ReviewConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mail_sender.trim().is_empty() {
            return Err(ConfigError::Invalid("mail_sender must be non-empty".into()));
        }
        if self.escalation_address.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "escalation_address must be non-empty".into(),
            ));
        }
        if self.default_show_title.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_show_title must be non-empty".into(),
            ));
        }
        if self.merge_titles.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "merge_titles must both be non-empty".into(),
            ));
        }
        if self.audit_capacity == 0 {
            return Err(ConfigError::Invalid("audit_capacity must be positive".into()));
        }
        Ok(())
    }
}
