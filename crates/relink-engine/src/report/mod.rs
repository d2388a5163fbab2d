//! Reporters — output formats for scan results.
//!
//! The presentation layer proper (buttons, selection) lives with the host;
//! these render the two result lists for terminals and tooling.

pub mod console;
pub mod json;

use serde::Serialize;

use relink_core::traits::AssetStore;
use relink_core::types::{AssetKind, AssetPath};

use crate::session::ScanSession;

/// The two result lists of a session, snapshotted for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Composite assets with broken links, in discovery order.
    pub composites: Vec<AssetPath>,
    /// Data objects with broken links, in discovery order.
    pub data_objects: Vec<AssetPath>,
}

impl ScanReport {
    pub fn from_session<S: AssetStore>(session: &ScanSession<S>) -> Self {
        Self {
            composites: session.findings(AssetKind::Composite).as_slice().to_vec(),
            data_objects: session.findings(AssetKind::DataObject).as_slice().to_vec(),
        }
    }

    pub fn total_findings(&self) -> usize {
        self.composites.len() + self.data_objects.len()
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &ScanReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}
