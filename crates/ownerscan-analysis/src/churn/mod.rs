//! Change-frequency subsystem — history collection, path filtering, and
//! per-file change-count aggregation.

pub mod aggregator;
pub mod filter;
pub mod history;

pub use aggregator::{aggregate, aggregate_text, parse_change_line, ChangeCounts};
pub use filter::FileFilter;
pub use history::{GitHistory, HistorySource};
