//! Change Aggregator: `<count> <path>` lines into a path -> count map.

use ownerscan_core::errors::HistoryError;
use ownerscan_core::tracing::fields;
use ownerscan_core::types::FxHashMap;
use tracing::debug;

/// Accepted relative path -> change count.
pub type ChangeCounts = FxHashMap<String, u64>;

/// Parse one history line of the shape
/// `[whitespace] digits whitespace path`.
///
/// Returns `Ok(None)` for lines that do not have that shape (blank
/// separators, stray output). A digit run that does not fit a `u64` is a
/// `MalformedCount` error.
pub fn parse_change_line(line: &str) -> Result<Option<(u64, &str)>, HistoryError> {
    let rest = line.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Ok(None);
    }

    let (digits, after) = rest.split_at(digits_end);
    if !after.starts_with(char::is_whitespace) {
        return Ok(None);
    }
    let path = after.trim_start();
    if path.is_empty() {
        return Ok(None);
    }

    let count = digits
        .parse::<u64>()
        .map_err(|_| HistoryError::MalformedCount {
            count: digits.to_string(),
            line: line.to_string(),
        })?;
    Ok(Some((count, path)))
}

/// Aggregate history lines, keeping only paths for which `accept` is true.
///
/// A path seen more than once keeps its last count; counts are not summed.
/// A malformed count aborts the whole aggregation.
pub fn aggregate<I, S, F>(lines: I, accept: F) -> Result<ChangeCounts, HistoryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let mut counts = ChangeCounts::default();
    let mut skipped = 0usize;
    let mut rejected = 0usize;

    for line in lines {
        match parse_change_line(line.as_ref())? {
            Some((count, path)) if accept(path) => {
                counts.insert(path.to_string(), count);
            }
            Some(_) => rejected += 1,
            None => skipped += 1,
        }
    }

    debug!(
        accepted = counts.len(),
        { fields::LINES_SKIPPED } = skipped,
        { fields::PATHS_REJECTED } = rejected,
        "aggregated change counts"
    );
    Ok(counts)
}

/// [`aggregate`] over a raw text blob, one record per line.
pub fn aggregate_text<F>(raw: &str, accept: F) -> Result<ChangeCounts, HistoryError>
where
    F: Fn(&str) -> bool,
{
    aggregate(raw.lines(), accept)
}
