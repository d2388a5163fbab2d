//! Shared data model: asset identity, scan phases, problems, findings.

pub mod asset;
pub mod collections;
pub mod finding_set;
pub mod problem;

pub use asset::{AssetKind, AssetPath, ObjectId, ScanPhase};
pub use finding_set::FindingSet;
pub use problem::{Problem, ProblemList};
