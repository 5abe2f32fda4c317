//! Configuration system for ownerscan.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod filter_config;
pub mod ownerscan_config;
pub mod report_config;

pub use filter_config::FilterConfig;
pub use ownerscan_config::{expand_home, home_dir, CliOverrides, OwnerscanConfig};
pub use report_config::ReportConfig;
