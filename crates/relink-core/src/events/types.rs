//! Event payload types.

use crate::types::{AssetKind, AssetPath, ScanPhase};

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub kind: AssetKind,
    /// Size of the snapshotted path list.
    pub total: usize,
}

/// Payload for `on_progress`. Produced by both scan and repair.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// Task label, e.g. "Scanning composite assets".
    pub task: String,
    /// The path currently being processed.
    pub current_item: AssetPath,
    /// Completion fraction in `[0.0, 1.0]`; non-decreasing within one task
    /// and exactly 1.0 on the final item of a scan.
    pub fraction: f64,
}

/// Payload for `on_phase_changed`.
#[derive(Debug, Clone)]
pub struct PhaseChangedEvent {
    pub phase: ScanPhase,
}

/// Payload for `on_scan_complete`. Not emitted for cancelled scans.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub kind: AssetKind,
    /// Paths visited (equals the snapshot size for a full scan).
    pub visited: usize,
    /// Paths flagged into the finding set.
    pub flagged: usize,
    pub duration_ms: u64,
}

/// Payload for `on_repair_complete`.
#[derive(Debug, Clone)]
pub struct RepairCompleteEvent {
    /// Paths the repair pass visited.
    pub total: usize,
    /// Sub-part slots stripped across all repaired assets.
    pub stripped_sub_parts: usize,
    /// Paths that could not be opened or saved.
    pub failed: usize,
}

/// Severity of a diagnostic log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
}

/// Payload for `on_log`.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub severity: LogSeverity,
    pub message: String,
}
