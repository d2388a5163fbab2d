//! The asset storage collaborator.

use crate::types::{AssetKind, AssetPath};

use super::walk::{CompositeAsset, ReferenceFields};

/// A detached, editable in-memory instantiation of a composite object.
///
/// Edits never touch the live scene representation; the instantiation is
/// persisted explicitly via [`AssetStore::save_composite`] and released by
/// dropping it.
pub trait EditableComposite {
    /// Remove every sub-part slot whose defining type failed to resolve.
    /// Returns how many slots were stripped. Stripping an already-clean
    /// instantiation removes nothing and is not an error.
    fn strip_missing_sub_parts(&mut self) -> usize;
}

/// Storage/indexing collaborator: enumerate-by-kind, load, save.
///
/// Load failure is a domain outcome, not an error — a `None` means the path
/// resolves to no object, which the scan records as a finding of its own.
pub trait AssetStore {
    /// The store's editable composite instantiation.
    type Editable: EditableComposite;

    /// All known asset paths of a kind. No ordering guarantee beyond being
    /// stable enough for one scan; the session snapshots the list once.
    fn enumerate(&self, kind: AssetKind) -> Vec<AssetPath>;

    /// Load a standalone data object for inspection.
    fn load_data_object(&self, path: &AssetPath) -> Option<Box<dyn ReferenceFields>>;

    /// Load a composite object for inspection.
    fn load_composite(&self, path: &AssetPath) -> Option<Box<dyn CompositeAsset>>;

    /// Load a composite object into a detached editable instantiation.
    fn open_composite(&self, path: &AssetPath) -> Option<Self::Editable>;

    /// Persist an edited instantiation back to `path`, overwriting.
    /// Returns `false` on failure.
    fn save_composite(&self, path: &AssetPath, edited: &Self::Editable) -> bool;
}
