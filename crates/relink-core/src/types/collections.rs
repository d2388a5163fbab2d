//! Fast hash collections used throughout relink.

pub use rustc_hash::{FxHashMap, FxHashSet};
