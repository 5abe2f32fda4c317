//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FORMAT, DEFAULT_LIMIT, DEFAULT_NUM_DAYS};

/// Configuration for the ranked report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Trailing history window in days. Default: 30.
    pub num_days: Option<u32>,
    /// Maximum rows printed. Default: 20.
    pub limit: Option<usize>,
    /// Output format: "text" | "json". Default: "text".
    pub format: Option<String>,
}

impl ReportConfig {
    /// Returns the effective window, defaulting to 30 days.
    pub fn effective_num_days(&self) -> u32 {
        self.num_days.unwrap_or(DEFAULT_NUM_DAYS)
    }

    /// Returns the effective row limit, defaulting to 20.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Returns the effective output format, defaulting to "text".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }
}
