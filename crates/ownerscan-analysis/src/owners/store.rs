//! Declaration Store — parse-once cache of `OWNERS` files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ownerscan_core::constants::{
    FILE_REFERENCE_PREFIX, NOPARENT_DIRECTIVE, OWNER_SEPARATOR, PER_FILE_DIRECTIVE,
};
use ownerscan_core::errors::OwnersError;
use ownerscan_core::tracing::fields;
use ownerscan_core::types::{FxHashMap, OwnerSet};
use tracing::{debug, trace};

use super::types::OwnershipDeclaration;
use crate::paths;

/// Parses declaration files and memoizes them by normalized absolute path.
///
/// One store lives for the whole run. Each distinct file is read at most
/// once; repeated requests return the same `Arc`.
#[derive(Debug)]
pub struct DeclarationStore {
    repo_root: PathBuf,
    cache: FxHashMap<PathBuf, Arc<OwnershipDeclaration>>,
    /// Files whose parse is on the stack, outermost first.
    in_progress: Vec<PathBuf>,
    cache_hits: u64,
}

impl DeclarationStore {
    /// Create a store for the repository at `repo_root`. `file://`
    /// references are resolved against this root.
    pub fn new(repo_root: impl AsRef<Path>) -> Self {
        Self {
            repo_root: paths::absolutize(repo_root.as_ref()),
            cache: FxHashMap::default(),
            in_progress: Vec::new(),
            cache_hits: 0,
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Number of distinct declaration files parsed so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains_key(&paths::normalize(path))
    }

    /// Parse the declaration file at `path` (absolute), or return the cached
    /// result.
    ///
    /// # Errors
    /// `Io` if the file (or a file it references) cannot be read,
    /// `MalformedPerFile` for a `per-file` line without `=`, and
    /// `CyclicReference` if a `file://` chain leads back to a file that is
    /// still being parsed.
    pub fn parse(&mut self, path: impl AsRef<Path>) -> Result<Arc<OwnershipDeclaration>, OwnersError> {
        let path = paths::normalize(path.as_ref());

        if let Some(cached) = self.cache.get(&path) {
            self.cache_hits += 1;
            trace!(path = %path.display(), { fields::CACHE_HITS } = self.cache_hits, "declaration cache hit");
            return Ok(Arc::clone(cached));
        }

        if let Some(pos) = self.in_progress.iter().position(|p| *p == path) {
            let mut chain = self.in_progress[pos..].to_vec();
            chain.push(path);
            return Err(OwnersError::CyclicReference { chain });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| OwnersError::Io {
            path: path.clone(),
            source,
        })?;

        self.in_progress.push(path.clone());
        let parsed = self.parse_content(&path, content.trim());
        self.in_progress.pop();

        let declaration = Arc::new(parsed?);
        self.cache.insert(path.clone(), Arc::clone(&declaration));
        debug!(
            path = %path.display(),
            owners = declaration.default_owners.len(),
            overrides = declaration.per_path_overrides.len(),
            { fields::DECLARATIONS_PARSED } = self.cache.len(),
            "parsed declaration file"
        );
        Ok(declaration)
    }

    /// Classify each line independently: `set noparent`, `per-file`, or an
    /// owner token. Blank lines are skipped.
    fn parse_content(&mut self, path: &Path, content: &str) -> Result<OwnershipDeclaration, OwnersError> {
        let dir = path.parent().unwrap_or(&self.repo_root).to_path_buf();
        let mut declaration = OwnershipDeclaration::default();

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if line == NOPARENT_DIRECTIVE {
                declaration.inherits_from_parent = false;
            } else if let Some(rest) = line.strip_prefix(PER_FILE_DIRECTIVE) {
                let (pattern, spec) =
                    rest.split_once('=').ok_or_else(|| OwnersError::MalformedPerFile {
                        path: path.to_path_buf(),
                        line: line.to_string(),
                    })?;
                // Exact match only: the pattern is a literal relative path.
                let key = paths::join_normalized(&dir, pattern.trim());
                let mut owners = OwnerSet::default();
                for token in spec
                    .split(OWNER_SEPARATOR)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                {
                    self.expand_owner(token, &mut owners)?;
                }
                declaration.per_path_overrides.insert(key, owners);
            } else {
                self.expand_owner(line, &mut declaration.default_owners)?;
            }
        }

        Ok(declaration)
    }

    /// Add the identifiers named by `token` to `into`. A `file://` token is
    /// replaced by the referenced file's default owners; its per-file
    /// overrides do not propagate.
    fn expand_owner(&mut self, token: &str, into: &mut OwnerSet) -> Result<(), OwnersError> {
        match token.strip_prefix(FILE_REFERENCE_PREFIX) {
            Some(relative) => {
                let referenced = paths::join_normalized(&self.repo_root, relative.trim());
                let declaration = self.parse(&referenced)?;
                into.extend(declaration.default_owners.iter().cloned());
            }
            None => {
                into.insert(token.to_string());
            }
        }
        Ok(())
    }
}
