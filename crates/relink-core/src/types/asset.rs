//! Asset identity and scan phase types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-relative identifier of an asset.
///
/// Opaque to the engine: the asset store hands these out during enumeration
/// and accepts them back for load/save. Used as the unique key for findings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The two asset categories relink scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Hierarchical template instance composed of typed sub-parts.
    Composite,
    /// Standalone serialized asset with no sub-part hierarchy.
    DataObject,
}

impl AssetKind {
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Composite => "composite",
            AssetKind::DataObject => "data object",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of the scan session. Exactly one phase is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanPhase {
    Idle,
    ScanningComposites,
    ScanningDataObjects,
}

impl ScanPhase {
    /// The scanning phase for a given asset kind.
    pub fn for_kind(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Composite => ScanPhase::ScanningComposites,
            AssetKind::DataObject => ScanPhase::ScanningDataObjects,
        }
    }

    /// The asset kind being scanned, or `None` when idle.
    pub fn kind(&self) -> Option<AssetKind> {
        match self {
            ScanPhase::Idle => None,
            ScanPhase::ScanningComposites => Some(AssetKind::Composite),
            ScanPhase::ScanningDataObjects => Some(AssetKind::DataObject),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ScanPhase::Idle)
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanPhase::Idle => "idle",
            ScanPhase::ScanningComposites => "scanning composites",
            ScanPhase::ScanningDataObjects => "scanning data objects",
        };
        f.write_str(s)
    }
}

/// Low-level stored identifier behind a reference field.
///
/// Zero means the field was deliberately left empty. A field whose reference
/// does not resolve but whose backing identifier is non-zero once pointed at
/// something that is now gone — that is a dangling link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl ObjectId {
    pub const EMPTY: ObjectId = ObjectId(0);

    /// True for the deliberately-empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
