//! Top-level ownerscan configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{FilterConfig, ReportConfig};
use crate::constants::{PROJECT_CONFIG_FILE, SUPPORTED_FORMATS, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`OWNERSCAN_*`)
/// 3. Project config (`ownerscan.toml` in the repository root)
/// 4. User config (`~/.ownerscan/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OwnerscanConfig {
    pub report: ReportConfig,
    pub filter: FilterConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub num_days: Option<u32>,
    pub limit: Option<usize>,
    pub format: Option<String>,
}

impl OwnerscanConfig {
    /// Load configuration with layered resolution, using `root` (the
    /// repository being analyzed) to locate the project config.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // An unreadable user config is not fatal; carry on with defaults.
                        ::tracing::warn!(path = %user_config_path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OwnerscanConfig) -> Result<(), ConfigError> {
        if config.report.num_days == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.num_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.report.format {
            if !SUPPORTED_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("must be one of {}", SUPPORTED_FORMATS.join(", ")),
                });
            }
        }
        for pattern in &config.filter.extra_exclude {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(ConfigError::ValidationFailed {
                    field: "filter.extra_exclude".to_string(),
                    message: format!("invalid glob {pattern:?}: {e}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.ownerscan/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut OwnerscanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OwnerscanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut OwnerscanConfig, other: &OwnerscanConfig) {
        // Report
        if other.report.num_days.is_some() {
            base.report.num_days = other.report.num_days;
        }
        if other.report.limit.is_some() {
            base.report.limit = other.report.limit;
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }

        // Filter
        if !other.filter.excluded_names.is_empty() {
            base.filter.excluded_names = other.filter.excluded_names.clone();
        }
        if !other.filter.excluded_suffixes.is_empty() {
            base.filter.excluded_suffixes = other.filter.excluded_suffixes.clone();
        }
        if !other.filter.excluded_extensions.is_empty() {
            base.filter.excluded_extensions = other.filter.excluded_extensions.clone();
        }
        if !other.filter.extra_exclude.is_empty() {
            base.filter.extra_exclude = other.filter.extra_exclude.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `OWNERSCAN_NUM_DAYS`, `OWNERSCAN_LIMIT`, `OWNERSCAN_FORMAT`.
    fn apply_env_overrides(config: &mut OwnerscanConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("OWNERSCAN_NUM_DAYS") {
            config.report.num_days = Some(parse_env("OWNERSCAN_NUM_DAYS", &val)?);
        }
        if let Ok(val) = std::env::var("OWNERSCAN_LIMIT") {
            config.report.limit = Some(parse_env("OWNERSCAN_LIMIT", &val)?);
        }
        if let Ok(val) = std::env::var("OWNERSCAN_FORMAT") {
            config.report.format = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut OwnerscanConfig, cli: &CliOverrides) {
        if let Some(v) = cli.num_days {
            config.report.num_days = Some(v);
        }
        if let Some(v) = cli.limit {
            config.report.limit = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.report.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, val: &str) -> Result<T, ConfigError> {
    val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("cannot parse {val:?}"),
    })
}

/// Cross-platform home directory resolution.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Expand a leading `~` to the home directory. Other paths pass through.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => match home_dir() {
            Some(home) => {
                let rest = rest.trim_start_matches(['/', '\\']);
                if rest.is_empty() {
                    home
                } else {
                    home.join(rest)
                }
            }
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}
