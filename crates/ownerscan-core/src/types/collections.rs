//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};

/// A resolved set of owner identifiers.
pub type OwnerSet = FxHashSet<String>;
