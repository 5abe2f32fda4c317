//! History collaborator: per-file change counts over a trailing window.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use ownerscan_core::errors::HistoryError;
use tracing::{debug, warn};

/// Source of raw change-count text.
///
/// Implementations return one record per line in the form
/// `<spaces><count><spaces><path>`; blank lines are allowed.
pub trait HistorySource {
    fn change_counts(&self, repo_root: &Path, num_days: u32) -> Result<String, HistoryError>;
}

/// Reads history with the `git` command line.
///
/// Lists the files touched by every non-merge commit in the window and
/// tallies how often each path appears.
#[derive(Debug, Clone)]
pub struct GitHistory {
    program: PathBuf,
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHistory {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Whether `HEAD` resolves to a commit. A freshly initialized
    /// repository has none, and `git log` fails there.
    fn has_commits(&self, repo_root: &Path) -> Result<bool, HistoryError> {
        let status = Command::new(&self.program)
            .args(["rev-parse", "--verify", "--quiet", "HEAD"])
            .current_dir(repo_root)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(status.success())
    }
}

impl HistorySource for GitHistory {
    fn change_counts(&self, repo_root: &Path, num_days: u32) -> Result<String, HistoryError> {
        if !repo_root.join(".git").exists() {
            return Err(HistoryError::NotARepository {
                path: repo_root.display().to_string(),
            });
        }

        if !self.has_commits(repo_root)? {
            debug!(repo = %repo_root.display(), "repository has no commits");
            return Ok(String::new());
        }

        let since = format!("{num_days} days ago");
        // Unquoted paths, otherwise non-ASCII names arrive C-escaped.
        let output = Command::new(&self.program)
            .args(["-c", "core.quotepath=off"])
            .args(["log", "--name-only", "--pretty=format:", "--since"])
            .arg(&since)
            .arg("--no-merges")
            .current_dir(repo_root)
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(HistoryError::CommandFailed {
                message: stderr.trim().to_string(),
            });
        }
        if !stderr.trim().is_empty() {
            warn!(stderr = %stderr.trim(), "git log wrote to stderr");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = tally_paths(stdout.lines());
        debug!(num_days, bytes = text.len(), "collected change history");
        Ok(text)
    }
}

/// Count occurrences of each non-blank path and render them as
/// `uniq -c`-style lines, sorted by path.
pub fn tally_paths<'a, I>(paths: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for path in paths {
        let path = path.trim_end();
        if path.trim().is_empty() {
            continue;
        }
        *counts.entry(path).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(path, count)| format!("{count:>7} {path}\n"))
        .collect()
}
