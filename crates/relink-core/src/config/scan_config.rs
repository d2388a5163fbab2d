//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scan session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Emit a progress notification every N visited paths (the final path
    /// always reports). Default: 10.
    pub progress_interval: Option<usize>,
    /// Enumerate inactive/disabled sub-parts of composites. Default: true.
    pub include_inactive: Option<bool>,
}

impl ScanConfig {
    /// Effective progress interval, defaulting to 10.
    pub fn effective_progress_interval(&self) -> usize {
        self.progress_interval.unwrap_or(10)
    }

    /// Effective include-inactive flag, defaulting to true.
    pub fn effective_include_inactive(&self) -> bool {
        self.include_inactive.unwrap_or(true)
    }
}
