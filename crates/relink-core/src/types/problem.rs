//! Per-asset problem diagnostics.

use std::fmt;

use smallvec::SmallVec;

/// One problem found while inspecting a single asset.
///
/// Only the presence of problems decides whether an asset is flagged; the
/// variants carry the detail needed for the diagnostic log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// A sub-part slot is present but its defining type no longer resolves
    /// (e.g. a deleted script class). `slot` is the index in the depth-first
    /// sub-part enumeration.
    MissingSubPartType { slot: usize },
    /// A reference field whose target no longer resolves but whose backing
    /// identifier is non-zero.
    DanglingReference { owner_type: String, field: String },
    /// The asset path itself resolved to no loadable object.
    MissingObject,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::MissingSubPartType { slot } => {
                write!(f, "missing sub-part type at slot {slot}")
            }
            Problem::DanglingReference { owner_type, field } => {
                write!(f, "dangling reference on '{owner_type}', field '{field}'")
            }
            Problem::MissingObject => f.write_str("asset is missing or unloadable"),
        }
    }
}

/// Problems for one inspected asset. Usually empty or tiny, so inline.
pub type ProblemList = SmallVec<[Problem; 4]>;
