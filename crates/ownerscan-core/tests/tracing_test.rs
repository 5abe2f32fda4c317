//! Tests for the ownerscan tracing setup.

use std::sync::Mutex;

use ownerscan_core::tracing::init_tracing;

/// Serializes tests that touch OWNERSCAN_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_per_module_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OWNERSCAN_LOG", "ownerscan_analysis::owners=debug,ownerscan_analysis::churn=warn");
    init_tracing();
    std::env::remove_var("OWNERSCAN_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OWNERSCAN_LOG", "=== not a filter ===");
    init_tracing();
    std::env::remove_var("OWNERSCAN_LOG");
}
