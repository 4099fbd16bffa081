//! Tests for parsing statistics functionality

use super::super::stats::{ParseStats, SkipReason};

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_rows: 100,
        records_parsed: 95,
        rows_skipped: 5,
        skipped: vec![],
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());

    let poor_stats = ParseStats {
        total_rows: 100,
        records_parsed: 80,
        rows_skipped: 20,
        skipped: vec![],
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
    assert!(!poor_stats.is_successful());
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_rows, 0);
    assert_eq!(empty_stats.records_parsed, 0);
    assert_eq!(empty_stats.rows_skipped, 0);
    assert!(empty_stats.skipped.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful());
}

#[test]
fn test_skip_reason_messages() {
    assert_eq!(
        SkipReason::TooFewFields {
            found: 3,
            expected: 8
        }
        .to_string(),
        "expected at least 8 fields, found 3"
    );
    assert_eq!(
        SkipReason::MissingRequired {
            field: "name".to_string()
        }
        .to_string(),
        "required field 'name' is empty"
    );
    assert_eq!(
        SkipReason::InvalidCoordinate {
            field: "latitude".to_string(),
            value: "norte".to_string()
        }
        .to_string(),
        "invalid latitude 'norte'"
    );
    assert_eq!(
        SkipReason::SchemaMismatch {
            field: "latitude".to_string(),
            rule: "Trimmed".to_string()
        }
        .to_string(),
        "field 'latitude' cannot use rule Trimmed"
    );
}
