//! Change-history errors.

use super::error_code::{self, OwnerscanErrorCode};

/// Errors that can occur while collecting or aggregating change counts.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Can not parse count: {count}; line: {line}")]
    MalformedCount { count: String, line: String },

    #[error("Not a git repository: {path}")]
    NotARepository { path: String },

    #[error("History command failed: {message}")]
    CommandFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OwnerscanErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedCount { .. } => error_code::MALFORMED_COUNT,
            Self::NotARepository { .. } => error_code::NOT_A_REPOSITORY,
            Self::CommandFailed { .. } => error_code::HISTORY_COMMAND_FAILED,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
