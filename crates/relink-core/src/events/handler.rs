//! Event handler trait with no-op defaults.

use super::types::*;

/// Receiver for scan/repair lifecycle events.
///
/// All methods default to no-ops; implement only what you render. Handlers
/// must be cheap — dispatch is synchronous and runs inside the tick.
pub trait RelinkEventHandler: Send + Sync {
    /// A scan of one asset category has started.
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}

    /// Periodic progress: every N paths during a scan, every path during
    /// repair, and always on the final path.
    fn on_progress(&self, _event: &ProgressEvent) {}

    /// Any visible progress indicator should be dismissed.
    fn on_progress_cleared(&self) {}

    /// The session's phase changed (scan start, completion, cancellation).
    fn on_phase_changed(&self, _event: &PhaseChangedEvent) {}

    /// A scan ran to exhaustion of its path list.
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}

    /// A repair pass finished.
    fn on_repair_complete(&self, _event: &RepairCompleteEvent) {}

    /// Diagnostic line (per-problem detail, per-item repair failures,
    /// completion summaries).
    fn on_log(&self, _event: &LogEvent) {}
}
