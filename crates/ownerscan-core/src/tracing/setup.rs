//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the ownerscan tracing/logging system.
///
/// Reads the `OWNERSCAN_LOG` environment variable for per-module log levels.
/// Format: `OWNERSCAN_LOG=ownerscan_analysis::owners=debug,ownerscan_analysis::churn=trace`
///
/// Falls back to `ownerscan=info` if `OWNERSCAN_LOG` is not set or is invalid.
/// Output goes to stderr; stdout is reserved for the report.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("ownerscan=info"));

        // A subscriber may already be installed by an embedding binary or a
        // test harness; that is not an error for us.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
