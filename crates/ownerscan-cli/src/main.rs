//! `ownerscan` — which files owned by one person changed most recently?
//!
//! Usage:
//!   ownerscan --repo-dir ~/src/app --owner-email someone@example.com
//!   ownerscan --repo-dir . --owner-email someone@example.com --num-days 90 --limit 50 --format json

use std::process::ExitCode;

use clap::Parser;
use ownerscan_analysis::churn::GitHistory;
use ownerscan_analysis::report::{render, run_report, ReportOptions};
use ownerscan_core::config::{expand_home, CliOverrides, OwnerscanConfig};
use ownerscan_core::errors::{OwnerscanErrorCode, ReportError};
use ownerscan_core::tracing::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "ownerscan",
    version,
    about = "Rank files changed in the last N days that belong to one code owner"
)]
struct Args {
    /// Path to the git repository (`~` is expanded)
    #[arg(long = "repo-dir", visible_alias = "repoDir")]
    repo_dir: String,

    /// Email of the code owner
    #[arg(long = "owner-email", visible_alias = "ownerEmail")]
    owner_email: String,

    /// Number of days of history to count [default: 30]
    #[arg(long = "num-days", visible_alias = "numDays")]
    num_days: Option<u32>,

    /// Maximum number of rows to print [default: 20]
    #[arg(long)]
    limit: Option<usize>,

    /// Output format [default: text]
    #[arg(long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Show the OWNERS file that matched each row
    #[arg(long)]
    explain: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.display_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, ReportError> {
    let repo_root = expand_home(&args.repo_dir);
    let overrides = CliOverrides {
        num_days: args.num_days,
        limit: args.limit,
        format: args.format,
    };
    let config = OwnerscanConfig::load(&repo_root, Some(&overrides))?;
    tracing::debug!(repo = %repo_root.display(), ?config, "loaded configuration");

    let options =
        ReportOptions::from_config(repo_root, args.owner_email, &config)?.with_explain(args.explain);
    let rows = run_report(&options, &GitHistory::new())?;
    render(&rows, options.format, options.explain)
}
