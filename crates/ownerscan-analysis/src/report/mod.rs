//! Ranked churn report for one owner.

pub mod builder;
pub mod pipeline;
pub mod render;

pub use builder::{build_report, ReportRow};
pub use pipeline::{run_report, ReportOptions};
pub use render::{render, render_json, render_text, ReportFormat};
