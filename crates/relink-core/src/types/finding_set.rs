//! Ordered, duplicate-free collection of flagged asset paths.

use super::asset::AssetPath;
use super::collections::FxHashSet;

/// Flagged asset paths in discovery order, each at most once.
///
/// Insertion order is the order the scan visited the paths; re-inserting a
/// path already present is a no-op. The composite and data-object sets of a
/// session are independent instances.
#[derive(Debug, Default, Clone)]
pub struct FindingSet {
    ordered: Vec<AssetPath>,
    seen: FxHashSet<AssetPath>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a path. Returns `false` if it was already present.
    pub fn insert(&mut self, path: AssetPath) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.ordered.push(path);
        true
    }

    pub fn contains(&self, path: &AssetPath) -> bool {
        self.seen.contains(path)
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetPath> {
        self.ordered.iter()
    }

    /// Paths in discovery order.
    pub fn as_slice(&self) -> &[AssetPath] {
        &self.ordered
    }
}

impl<'a> IntoIterator for &'a FindingSet {
    type Item = &'a AssetPath;
    type IntoIter = std::slice::Iter<'a, AssetPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}
