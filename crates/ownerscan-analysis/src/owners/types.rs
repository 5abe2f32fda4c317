//! Ownership data model.

use std::path::PathBuf;

use ownerscan_core::types::{FxHashMap, OwnerSet};

/// Parsed contents of one `OWNERS` file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipDeclaration {
    /// False when the file contains `set noparent`. Recorded, not consulted
    /// by the resolver.
    pub inherits_from_parent: bool,
    /// Owners of every path under the file's directory, with `file://`
    /// references already expanded.
    pub default_owners: OwnerSet,
    /// Exact absolute path -> owner set. A later `per-file` line for the
    /// same path replaces the earlier one.
    pub per_path_overrides: FxHashMap<PathBuf, OwnerSet>,
}

impl Default for OwnershipDeclaration {
    fn default() -> Self {
        Self {
            inherits_from_parent: true,
            default_owners: OwnerSet::default(),
            per_path_overrides: FxHashMap::default(),
        }
    }
}

impl OwnershipDeclaration {
    /// True when the file opted out of parent inheritance.
    pub fn is_noparent(&self) -> bool {
        !self.inherits_from_parent
    }
}

/// Owners resolved for one queried path, plus the declaration file that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub owners: OwnerSet,
    /// Absolute path of the governing `OWNERS` file.
    pub declaration: PathBuf,
}
