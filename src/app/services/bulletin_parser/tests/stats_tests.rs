//! Tests for parsing statistics functionality

use crate::app::services::bulletin_parser::ParseStats;

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_rows: 100,
        rows_parsed: 95,
        rows_skipped: 5,
        lines_filtered: 4,
        errors: vec!["Row 3: bad".to_string()],
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful(90.0));
    assert!(!stats.is_successful(99.0));
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_rows, 0);
    assert_eq!(empty_stats.rows_parsed, 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful(0.0));
}

#[test]
fn test_record_skip() {
    let mut stats = ParseStats::new();
    stats.total_rows = 2;
    stats.rows_parsed = 1;
    stats.record_skip(2, "row has 3 fields, at least 8 required");

    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(
        stats.errors,
        vec!["Row 2: row has 3 fields, at least 8 required".to_string()]
    );
    assert_eq!(stats.success_rate(), 50.0);
}
