//! JSON reporter for tooling integration.

use super::{Reporter, ScanReport};

/// Machine-readable JSON output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &ScanReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| e.to_string())
    }
}
