//! Report rendering.

use std::fmt::Write as _;
use std::str::FromStr;

use ownerscan_core::errors::ReportError;

use super::builder::ReportRow;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// `<path>: <count>` per row. With `explain`, the governing `OWNERS` file
/// is appended in parentheses.
pub fn render_text(rows: &[ReportRow], explain: bool) -> String {
    let mut out = String::new();
    for row in rows {
        if explain {
            let _ = writeln!(out, "{}: {}  ({})", row.path, row.count, row.declaration.display());
        } else {
            let _ = writeln!(out, "{}: {}", row.path, row.count);
        }
    }
    out
}

/// Pretty-printed JSON array of rows.
pub fn render_json(rows: &[ReportRow]) -> Result<String, ReportError> {
    let mut out =
        serde_json::to_string_pretty(rows).map_err(|e| ReportError::Serialization(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

pub fn render(rows: &[ReportRow], format: ReportFormat, explain: bool) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(rows, explain)),
        ReportFormat::Json => render_json(rows),
    }
}
