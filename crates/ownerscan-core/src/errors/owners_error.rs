//! Ownership declaration and resolution errors.

use std::path::PathBuf;

use super::error_code::{self, OwnerscanErrorCode};

/// Errors raised while parsing `OWNERS` files or resolving a path's owners.
/// None of these are recoverable per file: they abort the surrounding report.
#[derive(Debug, thiserror::Error)]
pub enum OwnersError {
    #[error("Cannot read declaration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Owners file not found for {path}")]
    OwnerFileNotFound { path: String },

    #[error("Malformed per-file line in {path}: {line:?}")]
    MalformedPerFile { path: PathBuf, line: String },

    #[error("Cyclic file:// reference: {}", format_chain(.chain))]
    CyclicReference { chain: Vec<PathBuf> },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl OwnerscanErrorCode for OwnersError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::OwnerFileNotFound { .. } => error_code::OWNER_FILE_NOT_FOUND,
            Self::MalformedPerFile { .. } => error_code::MALFORMED_DECLARATION,
            Self::CyclicReference { .. } => error_code::CYCLIC_REFERENCE,
        }
    }
}
