//! Shared constants for ownerscan.

// ---- Declaration file format ----

/// File name of an ownership declaration file.
pub const OWNERS_FILE_NAME: &str = "OWNERS";

/// Directive that disables parent inheritance.
pub const NOPARENT_DIRECTIVE: &str = "set noparent";

/// Prefix token of a per-file override line.
pub const PER_FILE_DIRECTIVE: &str = "per-file";

/// Prefix of an owner token that references another declaration file.
pub const FILE_REFERENCE_PREFIX: &str = "file://";

/// Separator between owner tokens in a per-file owner spec.
pub const OWNER_SEPARATOR: char = ',';

// ---- Report defaults ----

/// Default trailing window in days.
pub const DEFAULT_NUM_DAYS: u32 = 30;

/// Default maximum number of report rows.
pub const DEFAULT_LIMIT: usize = 20;

/// Default report format.
pub const DEFAULT_FORMAT: &str = "text";

/// Supported report formats.
pub const SUPPORTED_FORMATS: &[&str] = &["text", "json"];

// ---- Change filter defaults ----

/// File names never counted as churn.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &["BUILD", "OWNERS", "DEPS"];

/// Generated-code file name suffixes.
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &["_proto.ts", "Proto.java"];

/// Snapshot, translation-bundle, and legacy-module extensions.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[".es6", ".xlf", ".snap"];

// ---- Configuration files ----

/// Project-level config file name, looked up in the repository root.
pub const PROJECT_CONFIG_FILE: &str = "ownerscan.toml";

/// User-level config directory name under the home directory.
pub const USER_CONFIG_DIR: &str = ".ownerscan";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "OWNERSCAN_LOG";
