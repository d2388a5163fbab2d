//! Console reporter — titled result sections for terminal output.

use super::{Reporter, ScanReport};
use relink_core::types::AssetPath;

/// Human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn section(&self, output: &mut String, title: &str, paths: &[AssetPath]) {
        let (cs, ce) = if self.use_color {
            ("\x1b[1m", "\x1b[0m")
        } else {
            ("", "")
        };
        output.push_str(&format!("{cs}{title}: {}{ce}\n", paths.len()));
        for path in paths {
            output.push_str(&format!("  {path}\n"));
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &ScanReport) -> Result<String, String> {
        let mut output = String::new();
        self.section(
            &mut output,
            "Composite assets with broken links",
            &report.composites,
        );
        output.push('\n');
        self.section(
            &mut output,
            "Data objects with broken links",
            &report.data_objects,
        );
        Ok(output)
    }
}
