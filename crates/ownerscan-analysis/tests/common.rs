//! Shared helpers for building on-disk OWNERS trees.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use ownerscan_core::types::OwnerSet;

pub fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

pub fn owners(ids: &[&str]) -> OwnerSet {
    ids.iter().map(|s| s.to_string()).collect()
}
