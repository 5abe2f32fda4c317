//! End-to-end run: history -> aggregate -> resolve -> rank.

use std::path::PathBuf;

use ownerscan_core::config::OwnerscanConfig;
use ownerscan_core::errors::ReportError;
use tracing::info;

use super::builder::{build_report, ReportRow};
use super::render::ReportFormat;
use crate::churn::{aggregate_text, FileFilter, HistorySource};
use crate::owners::OwnerResolver;

/// Everything one report run needs.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub repo_root: PathBuf,
    pub owner: String,
    pub num_days: u32,
    pub limit: usize,
    pub format: ReportFormat,
    pub explain: bool,
    pub filter: FileFilter,
}

impl ReportOptions {
    /// Build options from a resolved config.
    pub fn from_config(
        repo_root: impl Into<PathBuf>,
        owner: impl Into<String>,
        config: &OwnerscanConfig,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            repo_root: repo_root.into(),
            owner: owner.into(),
            num_days: config.report.effective_num_days(),
            limit: config.report.effective_limit(),
            format: config.report.effective_format().parse()?,
            explain: false,
            filter: FileFilter::from_config(&config.filter)?,
        })
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }
}

/// Produce the ranked rows for `options.owner`. Any error aborts the run;
/// there is no partial report.
pub fn run_report(
    options: &ReportOptions,
    history: &dyn HistorySource,
) -> Result<Vec<ReportRow>, ReportError> {
    let raw = history.change_counts(&options.repo_root, options.num_days)?;
    let counts = aggregate_text(&raw, |path| options.filter.accepts(path))?;

    let mut resolver = OwnerResolver::new(&options.repo_root);
    let rows = build_report(&counts, &mut resolver, &options.owner, options.limit)?;

    info!(
        owner = %options.owner,
        num_days = options.num_days,
        changed_files = counts.len(),
        declarations = resolver.store().cached_len(),
        rows = rows.len(),
        "report complete"
    );
    Ok(rows)
}
