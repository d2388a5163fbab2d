//! Synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::RelinkEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, `emit` iterates an empty Vec — effectively
/// free. A handler that panics is isolated and does not prevent subsequent
/// handlers from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RelinkEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RelinkEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    fn emit<F: Fn(&dyn RelinkEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_scan_started(&self, event: &ScanStartedEvent) {
        self.emit(|h| h.on_scan_started(event));
    }

    pub fn emit_progress(&self, event: &ProgressEvent) {
        self.emit(|h| h.on_progress(event));
    }

    pub fn emit_progress_cleared(&self) {
        self.emit(|h| h.on_progress_cleared());
    }

    pub fn emit_phase_changed(&self, event: &PhaseChangedEvent) {
        self.emit(|h| h.on_phase_changed(event));
    }

    pub fn emit_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit(|h| h.on_scan_complete(event));
    }

    pub fn emit_repair_complete(&self, event: &RepairCompleteEvent) {
        self.emit(|h| h.on_repair_complete(event));
    }

    pub fn emit_log(&self, event: &LogEvent) {
        self.emit(|h| h.on_log(event));
    }
}
