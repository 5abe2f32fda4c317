//! Structured span field names.
//!
//! Shared so log queries can rely on the same keys across subsystems.

/// Declaration Store: number of distinct declaration files parsed.
pub const DECLARATIONS_PARSED: &str = "declarations_parsed";

/// Declaration Store: number of cache hits.
pub const CACHE_HITS: &str = "cache_hits";

/// Aggregator: lines that did not match the change-count shape.
pub const LINES_SKIPPED: &str = "lines_skipped";

/// Aggregator: matched lines rejected by the acceptance predicate.
pub const PATHS_REJECTED: &str = "paths_rejected";

/// Report: rows emitted after owner filtering and truncation.
pub const ROWS_EMITTED: &str = "rows_emitted";
