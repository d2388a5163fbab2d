//! Notification sink for the presentation layer.
//!
//! The engine produces scan/repair lifecycle events; whoever renders them
//! (progress bar, log pane, result lists) registers a handler. Handlers get
//! no-op defaults so a consumer implements only what it renders.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RelinkEventHandler;
pub use types::{
    LogEvent, LogSeverity, PhaseChangedEvent, ProgressEvent, RepairCompleteEvent,
    ScanCompleteEvent, ScanStartedEvent,
};
