//! Change filter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_EXCLUDED_NAMES, DEFAULT_EXCLUDED_SUFFIXES,
};

/// Which changed paths are excluded from churn counting.
///
/// Each list replaces the compiled default when it is set (non-empty).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Exact file names to exclude. Default: `BUILD`, `OWNERS`, `DEPS`.
    #[serde(default)]
    pub excluded_names: Vec<String>,
    /// File name suffixes to exclude. Default: `_proto.ts`, `Proto.java`.
    #[serde(default)]
    pub excluded_suffixes: Vec<String>,
    /// Extensions (with leading dot) to exclude. Default: `.es6`, `.xlf`, `.snap`.
    #[serde(default)]
    pub excluded_extensions: Vec<String>,
    /// Extra glob patterns matched against the relative path.
    #[serde(default)]
    pub extra_exclude: Vec<String>,
}

impl FilterConfig {
    pub fn effective_excluded_names(&self) -> Vec<String> {
        or_defaults(&self.excluded_names, DEFAULT_EXCLUDED_NAMES)
    }

    pub fn effective_excluded_suffixes(&self) -> Vec<String> {
        or_defaults(&self.excluded_suffixes, DEFAULT_EXCLUDED_SUFFIXES)
    }

    pub fn effective_excluded_extensions(&self) -> Vec<String> {
        or_defaults(&self.excluded_extensions, DEFAULT_EXCLUDED_EXTENSIONS)
    }
}

fn or_defaults(configured: &[String], defaults: &[&str]) -> Vec<String> {
    if configured.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    }
}
