//! OwnerscanErrorCode trait for the process boundary.

/// Every error enum maps to a stable code string so the CLI can print a
/// machine-greppable prefix before the human message.
pub trait OwnerscanErrorCode {
    /// Returns the error code string (e.g., "OWNER_FILE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const IO_ERROR: &str = "IO_ERROR";
pub const OWNER_FILE_NOT_FOUND: &str = "OWNER_FILE_NOT_FOUND";
pub const MALFORMED_DECLARATION: &str = "MALFORMED_DECLARATION";
pub const CYCLIC_REFERENCE: &str = "CYCLIC_REFERENCE";
pub const MALFORMED_COUNT: &str = "MALFORMED_COUNT";
pub const NOT_A_REPOSITORY: &str = "NOT_A_REPOSITORY";
pub const HISTORY_COMMAND_FAILED: &str = "HISTORY_COMMAND_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
