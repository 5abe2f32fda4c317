//! Report Builder: join change counts with resolved owners.

use std::path::PathBuf;

use ownerscan_core::errors::OwnersError;
use ownerscan_core::tracing::fields;
use serde::Serialize;
use tracing::debug;

use crate::churn::ChangeCounts;
use crate::owners::OwnerResolver;

/// One ranked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub path: String,
    pub count: u64,
    /// Governing `OWNERS` file, relative to the repository root.
    pub declaration: PathBuf,
}

/// Keep the paths owned by `owner`, rank them by count (descending, ties by
/// path), and truncate to `limit`.
///
/// Every path is resolved, so a single path without an `OWNERS` file fails
/// the whole report.
pub fn build_report(
    counts: &ChangeCounts,
    resolver: &mut OwnerResolver,
    owner: &str,
    limit: usize,
) -> Result<Vec<ReportRow>, OwnersError> {
    let mut paths: Vec<(&String, &u64)> = counts.iter().collect();
    paths.sort_by(|a, b| a.0.cmp(b.0));

    let mut rows = Vec::new();
    for (path, &count) in paths {
        let resolution = resolver.resolve_with_source(path)?;
        if !resolution.owners.contains(owner) {
            continue;
        }
        let declaration = match resolution.declaration.strip_prefix(resolver.repo_root()) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => resolution.declaration.clone(),
        };
        rows.push(ReportRow {
            path: path.clone(),
            count,
            declaration,
        });
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.path.cmp(&b.path)));
    let matched = rows.len();
    rows.truncate(limit);

    debug!(
        owner,
        candidates = counts.len(),
        matched,
        { fields::ROWS_EMITTED } = rows.len(),
        "built report"
    );
    Ok(rows)
}
