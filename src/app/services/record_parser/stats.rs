//! Parsing statistics and result structures for tourism CSV processing
//!
//! This module provides types for tracking how many rows became records, why
//! the rest were skipped, and organizing parsed results for callers.

use super::schema::{FieldRule, RecordField};
use crate::app::models::TourismRecord;
use crate::constants::SUCCESS_RATE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Successfully parsed records, in source order
    pub records: Vec<TourismRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Why a data row did not produce a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Row had fewer fields than the layout requires
    TooFewFields { found: usize, expected: usize },

    /// A required text field was empty after trimming
    MissingRequired { field: String },

    /// A coordinate was not a finite number
    InvalidCoordinate { field: String, value: String },

    /// The layout gave a field a rule producing the wrong kind of value
    SchemaMismatch { field: String, rule: String },
}

impl SkipReason {
    pub fn missing_required(field: RecordField) -> Self {
        Self::MissingRequired {
            field: field.to_string(),
        }
    }

    pub fn invalid_coordinate(field: RecordField, value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn schema_mismatch(field: RecordField, rule: FieldRule) -> Self {
        Self::SchemaMismatch {
            field: field.to_string(),
            rule: format!("{:?}", rule),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found, expected } => {
                write!(f, "expected at least {} fields, found {}", expected, found)
            }
            SkipReason::MissingRequired { field } => write!(f, "required field '{}' is empty", field),
            SkipReason::InvalidCoordinate { field, value } => {
                write!(f, "invalid {} '{}'", field, value)
            }
            SkipReason::SchemaMismatch { field, rule } => {
                write!(f, "field '{}' cannot use rule {}", field, rule)
            }
        }
    }
}

/// A skipped data row, recorded only in diagnostic mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based physical line number in the source text
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of rows skipped as malformed
    pub rows_skipped: usize,

    /// Skip details, empty unless diagnostics were requested
    pub skipped: Vec<SkippedRow>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            records_parsed: 0,
            rows_skipped: 0,
            skipped: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > SUCCESS_RATE_THRESHOLD
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
