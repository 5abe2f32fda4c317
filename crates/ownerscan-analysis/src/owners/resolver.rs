//! Owner Resolver — nearest `OWNERS` file plus exact per-file overrides.

use std::path::{Path, PathBuf};

use ownerscan_core::constants::OWNERS_FILE_NAME;
use ownerscan_core::errors::OwnersError;
use ownerscan_core::types::OwnerSet;
use tracing::debug;

use super::store::DeclarationStore;
use super::types::ResolutionResult;
use crate::paths;

/// Maps repository-relative paths to owner sets.
///
/// Resolution results are not cached; every call walks the directory tree
/// again and relies on the store's memoization for the parse.
#[derive(Debug)]
pub struct OwnerResolver {
    store: DeclarationStore,
}

impl OwnerResolver {
    pub fn new(repo_root: impl AsRef<Path>) -> Self {
        Self::with_store(DeclarationStore::new(repo_root))
    }

    pub fn with_store(store: DeclarationStore) -> Self {
        Self { store }
    }

    pub fn repo_root(&self) -> &Path {
        self.store.repo_root()
    }

    pub fn store(&self) -> &DeclarationStore {
        &self.store
    }

    /// Owners of `relative_path`.
    pub fn resolve(&mut self, relative_path: &str) -> Result<OwnerSet, OwnersError> {
        self.resolve_with_source(relative_path).map(|r| r.owners)
    }

    /// Owners of `relative_path` together with the declaration file that
    /// governs it.
    ///
    /// An exact `per-file` entry for the path wins outright; it is never
    /// unioned with the directory defaults. The `set noparent` flag plays no
    /// part here, and an empty default set does not trigger a further climb.
    ///
    /// # Errors
    /// `OwnerFileNotFound` when no `OWNERS` file exists between the path and
    /// the repository root, plus any store error.
    pub fn resolve_with_source(&mut self, relative_path: &str) -> Result<ResolutionResult, OwnersError> {
        let absolute = paths::join_normalized(self.store.repo_root(), relative_path);
        let declaration_path =
            self.find_declaration(&absolute)
                .ok_or_else(|| OwnersError::OwnerFileNotFound {
                    path: relative_path.to_string(),
                })?;
        debug!(path = relative_path, declaration = %declaration_path.display(), "resolved declaration file");

        let declaration = self.store.parse(&declaration_path)?;
        let owners = match declaration.per_path_overrides.get(&absolute) {
            Some(overridden) => overridden.clone(),
            None => declaration.default_owners.clone(),
        };

        Ok(ResolutionResult {
            owners,
            declaration: declaration_path,
        })
    }

    /// Walk upward from the directory containing `absolute_path` and return
    /// the first `OWNERS` file found. The walk stops at the repository root's
    /// parent without probing it. Paths outside the root have no declaration.
    pub fn find_declaration(&self, absolute_path: &Path) -> Option<PathBuf> {
        let root = self.store.repo_root();
        if !absolute_path.starts_with(root) {
            debug!(path = %absolute_path.display(), "path escapes the repository root");
            return None;
        }
        let boundary = root.parent();
        let mut current = absolute_path.parent();

        while let Some(dir) = current {
            if Some(dir) == boundary {
                break;
            }
            let candidate = dir.join(OWNERS_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            current = dir.parent();
        }
        None
    }
}
