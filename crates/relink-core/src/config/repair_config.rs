//! Repair configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the repair pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RepairConfig {
    /// Keep paths whose repair failed in the composite finding set instead
    /// of clearing unconditionally. Default: false (the historical behavior:
    /// the set is cleared even when individual items failed; failures are
    /// still surfaced on the log channel).
    pub keep_findings_on_failure: Option<bool>,
}

impl RepairConfig {
    /// Effective keep-findings flag, defaulting to false.
    pub fn effective_keep_findings_on_failure(&self) -> bool {
        self.keep_findings_on_failure.unwrap_or(false)
    }
}
