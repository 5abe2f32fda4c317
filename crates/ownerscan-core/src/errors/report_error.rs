//! Report errors.

use super::error_code::{self, OwnerscanErrorCode};
use super::{ConfigError, HistoryError, OwnersError};

/// Errors that can occur while producing a ranked report.
/// Aggregates subsystem errors via `From` conversions. There is no partial
/// result: any of these ends the run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Ownership error: {0}")]
    Owners(#[from] OwnersError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unsupported report format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl OwnerscanErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Owners(e) => e.error_code(),
            Self::History(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
            Self::Serialization(_) => error_code::IO_ERROR,
        }
    }
}
