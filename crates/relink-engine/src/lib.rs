//! The relink scan/repair engine.
//!
//! Orchestrates the incremental, cancellable scan over a repository's assets
//! and the bulk-repair pass over flagged composites. The engine never walks
//! the filesystem or touches serialization itself — it drives the
//! collaborator traits from `relink-core` one asset per tick, so a host can
//! hang it off an idle-time callback without blocking.

pub mod inspect;
pub mod repair;
pub mod report;
pub mod session;

pub use repair::{RepairExecutor, RepairSummary};
pub use session::{Advance, ScanSession};
