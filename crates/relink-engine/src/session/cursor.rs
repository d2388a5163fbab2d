//! Per-phase scan cursor: snapshotted path list plus a visit index.

use relink_core::types::AssetPath;

/// Iteration state of one scan: the ordered path snapshot and the index of
/// the next unvisited path.
///
/// Created fresh at scan start, advanced exactly once per tick. The index is
/// monotonically non-decreasing and never exceeds the snapshot length.
#[derive(Debug)]
pub struct ScanCursor {
    paths: Vec<AssetPath>,
    index: usize,
}

impl ScanCursor {
    pub fn new(paths: Vec<AssetPath>) -> Self {
        Self { paths, index: 0 }
    }

    /// The next unvisited path, or `None` when exhausted.
    pub fn current(&self) -> Option<&AssetPath> {
        self.paths.get(self.index)
    }

    /// Advance past the current path. Saturates at the end of the snapshot.
    pub fn advance(&mut self) {
        if self.index < self.paths.len() {
            self.index += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.paths.len()
    }

    /// Paths visited so far.
    pub fn visited(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.paths.len()
    }

    /// Completion fraction `visited / total`. An empty snapshot is complete.
    pub fn fraction(&self) -> f64 {
        if self.paths.is_empty() {
            1.0
        } else {
            self.index as f64 / self.paths.len() as f64
        }
    }
}
