//! Lexical path helpers.
//!
//! Declaration keys and lookups are compared as plain paths, so every path
//! that enters the resolver goes through [`normalize`] first. Nothing here
//! touches the filesystem or follows symlinks.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without consulting the filesystem.
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Join `relative` onto `base` and normalize. A leading separator on
/// `relative` does not reset to the filesystem root; `file:///a` and
/// `file://a` name the same file.
pub fn join_normalized(base: &Path, relative: &str) -> PathBuf {
    let relative = relative.trim_start_matches(['/', '\\']);
    normalize(&base.join(relative))
}

/// Make `path` absolute against the current directory, then normalize.
pub fn absolutize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("a/b/../../..")), PathBuf::from(".."));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn join_ignores_leading_separator() {
        let base = Path::new("/repo");
        assert_eq!(join_normalized(base, "/x/OWNERS"), PathBuf::from("/repo/x/OWNERS"));
        assert_eq!(join_normalized(base, "x/../y.ts"), PathBuf::from("/repo/y.ts"));
    }
}
