//! Tests for the ownerscan error handling system.

use std::path::PathBuf;

use ownerscan_core::errors::*;

#[test]
fn test_error_codes() {
    let not_found = OwnersError::OwnerFileNotFound {
        path: "a/b.ts".into(),
    };
    assert_eq!(not_found.error_code(), "OWNER_FILE_NOT_FOUND");

    let io = OwnersError::Io {
        path: PathBuf::from("/repo/OWNERS"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(io.error_code(), "IO_ERROR");

    let malformed = HistoryError::MalformedCount {
        count: "x".into(),
        line: " x a.ts".into(),
    };
    assert_eq!(malformed.error_code(), "MALFORMED_COUNT");

    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_report_error_forwards_code() {
    let err: ReportError = OwnersError::OwnerFileNotFound {
        path: "x.ts".into(),
    }
    .into();
    assert!(matches!(err, ReportError::Owners(_)));
    assert_eq!(err.error_code(), "OWNER_FILE_NOT_FOUND");

    let err: ReportError = HistoryError::CommandFailed {
        message: "boom".into(),
    }
    .into();
    assert_eq!(err.error_code(), "HISTORY_COMMAND_FAILED");
}

#[test]
fn test_display_string_format() {
    let err = OwnersError::OwnerFileNotFound {
        path: "src/main.ts".into(),
    };
    assert_eq!(
        err.display_string(),
        "[OWNER_FILE_NOT_FOUND] Owners file not found for src/main.ts"
    );
}

#[test]
fn test_cycle_message_lists_chain() {
    let err = OwnersError::CyclicReference {
        chain: vec![
            PathBuf::from("/r/a/OWNERS"),
            PathBuf::from("/r/b/OWNERS"),
            PathBuf::from("/r/a/OWNERS"),
        ],
    };
    assert_eq!(
        err.to_string(),
        "Cyclic file:// reference: /r/a/OWNERS -> /r/b/OWNERS -> /r/a/OWNERS"
    );
}
