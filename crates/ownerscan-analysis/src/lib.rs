//! ownerscan analysis engine.
//!
//! - [`owners`]: `OWNERS` declaration parsing and per-path owner resolution
//! - [`churn`]: change-count aggregation over a history window
//! - [`report`]: joins the two into a ranked, owner-filtered report

pub mod churn;
pub mod owners;
pub mod paths;
pub mod report;
