//! Error handling for ownerscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod history_error;
pub mod owners_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use error_code::OwnerscanErrorCode;
pub use history_error::HistoryError;
pub use owners_error::OwnersError;
pub use report_error::ReportError;
