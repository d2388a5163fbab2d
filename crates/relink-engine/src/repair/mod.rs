//! Bulk repair of flagged composite objects.

use relink_core::events::{
    EventDispatcher, LogEvent, LogSeverity, ProgressEvent, RepairCompleteEvent,
};
use relink_core::traits::{AssetStore, EditableComposite};
use relink_core::types::AssetPath;

/// Aggregate result of one repair pass.
#[derive(Debug, Default)]
pub struct RepairSummary {
    /// Paths the pass visited.
    pub total: usize,
    /// Sub-part slots stripped across all assets.
    pub stripped_sub_parts: usize,
    /// Paths that could not be opened or saved, in visit order.
    pub failed_paths: Vec<AssetPath>,
}

impl RepairSummary {
    pub fn failed_count(&self) -> usize {
        self.failed_paths.len()
    }
}

/// Strips missing-type sub-parts from composites and persists the result.
///
/// Deliberately narrow: dangling reference fields are reported by the scan
/// but left untouched here. Per-item failures are logged and the pass keeps
/// going — one bad asset must not stop the rest.
pub struct RepairExecutor<'a, S: AssetStore> {
    store: &'a S,
    dispatcher: &'a EventDispatcher,
}

impl<'a, S: AssetStore> RepairExecutor<'a, S> {
    pub fn new(store: &'a S, dispatcher: &'a EventDispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Repair each path in list order: open a detached editable
    /// instantiation, strip unresolved sub-part slots, save back to the same
    /// path, release. Emits one progress notification per item and a
    /// progress-cleared plus summary at the end.
    pub fn repair(&self, paths: &[AssetPath]) -> RepairSummary {
        let total = paths.len();
        let mut stripped_sub_parts = 0;
        let mut failed_paths = Vec::new();

        for (index, path) in paths.iter().enumerate() {
            self.dispatcher.emit_progress(&ProgressEvent {
                task: "Repairing composite assets".to_string(),
                current_item: path.clone(),
                fraction: index as f64 / total as f64,
            });

            let mut edited = match self.store.open_composite(path) {
                Some(edited) => edited,
                None => {
                    self.warn(format!("repair: could not open '{path}'"));
                    failed_paths.push(path.clone());
                    continue;
                }
            };

            let stripped = edited.strip_missing_sub_parts();
            stripped_sub_parts += stripped;

            if self.store.save_composite(path, &edited) {
                tracing::debug!(path = %path, stripped, "repaired composite");
            } else {
                self.warn(format!("repair: failed to save '{path}'"));
                failed_paths.push(path.clone());
            }
            // The instantiation is released here (dropped).
        }

        self.dispatcher.emit_progress_cleared();

        let summary = RepairSummary {
            total,
            stripped_sub_parts,
            failed_paths,
        };
        self.dispatcher.emit_repair_complete(&RepairCompleteEvent {
            total: summary.total,
            stripped_sub_parts: summary.stripped_sub_parts,
            failed: summary.failed_count(),
        });

        let message = format!(
            "repair complete: stripped {} sub-part(s) across {} asset(s), {} failed",
            summary.stripped_sub_parts,
            summary.total,
            summary.failed_count()
        );
        tracing::info!("{message}");
        self.dispatcher.emit_log(&LogEvent {
            severity: LogSeverity::Info,
            message,
        });

        summary
    }

    fn warn(&self, message: String) {
        tracing::warn!("{message}");
        self.dispatcher.emit_log(&LogEvent {
            severity: LogSeverity::Warning,
            message,
        });
    }
}
