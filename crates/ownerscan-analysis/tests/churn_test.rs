//! Change Aggregator tests.

use ownerscan_analysis::churn::history::tally_paths;
use ownerscan_analysis::churn::{aggregate, aggregate_text, FileFilter};
use ownerscan_core::errors::HistoryError;

#[test]
fn test_default_filter_example() {
    let filter = FileFilter::default();
    let counts = aggregate_text("   3\tfoo/bar.ts\n\n   1 OWNERS\n", |p| filter.accepts(p)).unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts["foo/bar.ts"], 3);
}

#[test]
fn test_repeated_path_keeps_last_count() {
    let counts = aggregate_text("  2 a.ts\n  9 b.ts\n  5 a.ts\n", |_| true).unwrap();
    assert_eq!(counts["a.ts"], 5);
    assert_eq!(counts["b.ts"], 9);
}

#[test]
fn test_rejected_path_does_not_shadow_accepted_one() {
    // The predicate runs per line; a rejected duplicate never overwrites.
    let lines = vec!["  4 keep.ts", "  1 drop.ts"];
    let counts = aggregate(lines, |p| p != "drop.ts").unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts["keep.ts"], 4);
}

#[test]
fn test_noise_lines_skipped() {
    let raw = "\n  warning: something\n      7 src/lib.rs\n--\n      2 src/main.rs\n";
    let counts = aggregate_text(raw, |_| true).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["src/lib.rs"], 7);
    assert_eq!(counts["src/main.rs"], 2);
}

#[test]
fn test_malformed_count_aborts_aggregation() {
    let raw = "  1 a.ts\n  184467440737095516160 b.ts\n  3 c.ts\n";
    match aggregate_text(raw, |_| true).unwrap_err() {
        HistoryError::MalformedCount { count, line } => {
            assert_eq!(count, "184467440737095516160");
            assert_eq!(line, "  184467440737095516160 b.ts");
        }
        other => panic!("Expected MalformedCount, got: {:?}", other),
    }
}

#[test]
fn test_tally_output_feeds_aggregator() {
    let log = "web/a.ts\nweb/b.ts\n\nweb/a.ts\nOWNERS\n\nweb/a.ts\n";
    let filter = FileFilter::default();
    let counts = aggregate_text(&tally_paths(log.lines()), |p| filter.accepts(p)).unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts["web/a.ts"], 3);
    assert_eq!(counts["web/b.ts"], 1);
}
