//! Incremental, cancellable scan over one asset category.

use std::sync::Arc;
use std::time::Instant;

use relink_core::config::RelinkConfig;
use relink_core::errors::ScanError;
use relink_core::events::{
    EventDispatcher, LogEvent, LogSeverity, PhaseChangedEvent, ProgressEvent, RelinkEventHandler,
    ScanCompleteEvent, ScanStartedEvent,
};
use relink_core::traits::{AssetStore, Cancellable, CancellationToken};
use relink_core::types::{AssetKind, AssetPath, FindingSet, Problem, ProblemList, ScanPhase};

use crate::inspect::{classify_composite, scan_reference_fields};
use crate::repair::{RepairExecutor, RepairSummary};

use super::cursor::ScanCursor;

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// One path was visited; the scan continues.
    Advanced,
    /// The path list is exhausted; the session is idle again.
    Completed,
    /// Cancellation was observed; the session is idle with partial findings.
    Cancelled,
    /// No scan is in progress.
    Idle,
}

/// The scan session: owns the per-category finding sets and cursors and
/// performs exactly one unit of work per `advance` call.
///
/// Scanning thousands of assets synchronously would freeze the host, so the
/// session is a cooperative task: the host's idle-time hook (or
/// [`ScanSession::run_to_completion`]) calls `advance` repeatedly, and each
/// call loads and inspects a single asset. Single-threaded by design — the
/// finding sets and cursors have no writer other than the session itself.
pub struct ScanSession<S: AssetStore> {
    store: S,
    dispatcher: EventDispatcher,
    config: RelinkConfig,
    cancel: CancellationToken,
    phase: ScanPhase,
    composite_findings: FindingSet,
    data_findings: FindingSet,
    composite_cursor: Option<ScanCursor>,
    data_cursor: Option<ScanCursor>,
    started_at: Option<Instant>,
}

impl<S: AssetStore> ScanSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, RelinkConfig::default())
    }

    pub fn with_config(store: S, config: RelinkConfig) -> Self {
        Self {
            store,
            dispatcher: EventDispatcher::new(),
            config,
            cancel: CancellationToken::new(),
            phase: ScanPhase::Idle,
            composite_findings: FindingSet::new(),
            data_findings: FindingSet::new(),
            composite_cursor: None,
            data_cursor: None,
            started_at: None,
        }
    }

    /// Register a presentation-layer event handler.
    pub fn register_handler(&mut self, handler: Arc<dyn RelinkEventHandler>) {
        self.dispatcher.register(handler);
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_active(&self) -> bool {
        !self.phase.is_idle()
    }

    /// Flagged paths for a category, in discovery order.
    pub fn findings(&self, kind: AssetKind) -> &FindingSet {
        match kind {
            AssetKind::Composite => &self.composite_findings,
            AssetKind::DataObject => &self.data_findings,
        }
    }

    /// A clone of the current scan's cancellation token. Cancelling it makes
    /// the next `advance` transition to idle without visiting the remaining
    /// paths; findings collected so far are kept.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Begin a scan of one asset category.
    ///
    /// Rejected while any scan is active — the caller must wait for
    /// completion or cancel first. Otherwise the category's finding set is
    /// cleared, the path list is snapshotted from the store once (paths
    /// added or removed mid-scan are not observed), and the cursor resets.
    pub fn start(&mut self, kind: AssetKind) -> Result<(), ScanError> {
        if !self.phase.is_idle() {
            return Err(ScanError::ScanInProgress { active: self.phase });
        }

        self.findings_mut(kind).clear();
        let paths = self.store.enumerate(kind);
        let total = paths.len();
        *self.cursor_slot(kind) = Some(ScanCursor::new(paths));

        self.cancel = CancellationToken::new();
        self.phase = ScanPhase::for_kind(kind);
        self.started_at = Some(Instant::now());

        tracing::debug!(kind = %kind, total, "scan started");
        self.dispatcher
            .emit_phase_changed(&PhaseChangedEvent { phase: self.phase });
        self.dispatcher
            .emit_scan_started(&ScanStartedEvent { kind, total });
        Ok(())
    }

    /// Perform one unit of incremental work: visit a single asset.
    ///
    /// Run-to-completion and non-preemptible; the host yields between calls.
    /// The cursor advances exactly once whatever the outcome of the visit.
    pub fn advance(&mut self) -> Advance {
        let kind = match self.phase.kind() {
            Some(kind) => kind,
            None => return Advance::Idle,
        };

        if self.cancel.is_cancelled() {
            self.finish_cancelled(kind);
            return Advance::Cancelled;
        }

        let exhausted = self
            .cursor_slot(kind)
            .as_ref()
            .map_or(true, |c| c.is_exhausted());
        if exhausted {
            self.finish_complete(kind);
            return Advance::Completed;
        }

        let (path, visited, total, fraction) = {
            let cursor = match self.cursor_slot(kind).as_mut() {
                Some(cursor) => cursor,
                None => unreachable!("active phase always has a cursor"),
            };
            let path = match cursor.current() {
                Some(path) => path.clone(),
                None => unreachable!("non-exhausted cursor has a current path"),
            };
            cursor.advance();
            (path, cursor.visited(), cursor.total(), cursor.fraction())
        };

        let problems = self.inspect(kind, &path);
        if !problems.is_empty() {
            for problem in &problems {
                let message = format!("{path}: {problem}");
                tracing::warn!("{message}");
                self.dispatcher.emit_log(&LogEvent {
                    severity: LogSeverity::Warning,
                    message,
                });
            }
            // Duplicate insert is a no-op; a path is flagged at most once.
            self.findings_mut(kind).insert(path.clone());
        }

        let interval = self.config.scan.effective_progress_interval();
        if visited % interval == 0 || visited == total {
            self.dispatcher.emit_progress(&ProgressEvent {
                task: Self::task_label(kind).to_string(),
                current_item: path,
                fraction,
            });
        }
        if visited == total {
            self.dispatcher.emit_progress_cleared();
        }

        Advance::Advanced
    }

    /// Drive the active scan to completion (or until cancelled). For hosts
    /// without their own idle-tick primitive.
    pub fn run_to_completion(&mut self) -> Advance {
        loop {
            match self.advance() {
                Advance::Advanced => continue,
                outcome => return outcome,
            }
        }
    }

    /// Repair every flagged composite: strip sub-parts whose type failed to
    /// resolve and persist the result. Rejected while a scan is active.
    ///
    /// Dangling reference fields are reported by the scan but never repaired
    /// here. The composite finding set is cleared afterwards; with
    /// `repair.keep_findings_on_failure` set, paths whose repair failed are
    /// retained instead.
    pub fn repair_composites(&mut self) -> Result<RepairSummary, ScanError> {
        if !self.phase.is_idle() {
            return Err(ScanError::ScanInProgress { active: self.phase });
        }

        let executor = RepairExecutor::new(&self.store, &self.dispatcher);
        let summary = executor.repair(self.composite_findings.as_slice());

        let keep_failed = self.config.repair.effective_keep_findings_on_failure();
        self.composite_findings.clear();
        if keep_failed {
            for path in &summary.failed_paths {
                self.composite_findings.insert(path.clone());
            }
        }
        Ok(summary)
    }

    fn inspect(&self, kind: AssetKind, path: &AssetPath) -> ProblemList {
        match kind {
            AssetKind::Composite => match self.store.load_composite(path) {
                Some(root) => classify_composite(
                    root.as_ref(),
                    self.config.scan.effective_include_inactive(),
                ),
                None => smallvec::smallvec![Problem::MissingObject],
            },
            AssetKind::DataObject => match self.store.load_data_object(path) {
                Some(object) => scan_reference_fields(object.as_ref()),
                None => smallvec::smallvec![Problem::MissingObject],
            },
        }
    }

    fn finish_complete(&mut self, kind: AssetKind) {
        let cursor = self.cursor_slot(kind).take();
        let visited = cursor.as_ref().map_or(0, |c| c.visited());
        let flagged = self.findings(kind).len();
        let duration_ms = self
            .started_at
            .take()
            .map_or(0, |t| t.elapsed().as_millis() as u64);

        self.phase = ScanPhase::Idle;
        self.dispatcher.emit_progress_cleared();
        self.dispatcher
            .emit_phase_changed(&PhaseChangedEvent { phase: ScanPhase::Idle });
        self.dispatcher.emit_scan_complete(&ScanCompleteEvent {
            kind,
            visited,
            flagged,
            duration_ms,
        });

        let message = format!("scan complete: {flagged} of {visited} {kind} assets flagged");
        tracing::info!("{message}");
        self.dispatcher.emit_log(&LogEvent {
            severity: LogSeverity::Info,
            message,
        });
    }

    fn finish_cancelled(&mut self, kind: AssetKind) {
        let cursor = self.cursor_slot(kind).take();
        let visited = cursor.as_ref().map_or(0, |c| c.visited());
        let total = cursor.as_ref().map_or(0, |c| c.total());
        self.started_at = None;

        self.phase = ScanPhase::Idle;
        self.dispatcher.emit_progress_cleared();
        self.dispatcher
            .emit_phase_changed(&PhaseChangedEvent { phase: ScanPhase::Idle });

        let message = format!("scan cancelled after {visited} of {total} {kind} assets");
        tracing::info!("{message}");
        self.dispatcher.emit_log(&LogEvent {
            severity: LogSeverity::Info,
            message,
        });
    }

    fn findings_mut(&mut self, kind: AssetKind) -> &mut FindingSet {
        match kind {
            AssetKind::Composite => &mut self.composite_findings,
            AssetKind::DataObject => &mut self.data_findings,
        }
    }

    fn cursor_slot(&mut self, kind: AssetKind) -> &mut Option<ScanCursor> {
        match kind {
            AssetKind::Composite => &mut self.composite_cursor,
            AssetKind::DataObject => &mut self.data_cursor,
        }
    }

    fn task_label(kind: AssetKind) -> &'static str {
        match kind {
            AssetKind::Composite => "Scanning composite assets",
            AssetKind::DataObject => "Scanning data objects",
        }
    }
}
