//! Core tourism CSV parser implementation
//!
//! This module wires the tokenizer, field splitter and validator into a single
//! pass. The first non-blank row is always the header and is discarded; every
//! other row is handled on its own so one bad row never stops the rest.

use tracing::{debug, info};

use super::field_splitter::split_fields;
use super::schema::RecordSchema;
use super::stats::{ParseResult, ParseStats, SkippedRow};
use super::tokenizer::split_rows;
use super::validator::normalize_record;
use crate::app::models::TourismRecord;
use crate::config::Config;
use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};

/// How much detail to keep about skipped rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Count skipped rows only
    #[default]
    Lenient,
    /// Also record the line number and reason of every skipped row
    Diagnostic,
}

/// Parser for the tourism spreadsheet CSV export
///
/// The parser holds no state between calls: parsing the same text twice gives
/// equal results.
#[derive(Debug, Clone)]
pub struct RecordParser {
    schema: RecordSchema,
    delimiter: char,
    mode: ParseMode,
}

impl RecordParser {
    /// Create a parser for the given layout
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            delimiter: DEFAULT_DELIMITER,
            mode: ParseMode::Lenient,
        }
    }

    /// Create a parser from runtime configuration
    pub fn from_config(config: &Config) -> Self {
        let mode = if config.diagnostics {
            ParseMode::Diagnostic
        } else {
            ParseMode::Lenient
        };

        Self::new(RecordSchema::tourism_with_advisory_limit(
            config.advisory_max_chars,
        ))
        .with_delimiter(config.delimiter)
        .with_mode(mode)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse text into records, silently skipping malformed rows
    pub fn parse(&self, text: &str) -> Vec<TourismRecord> {
        self.parse_with_stats(text).records
    }

    /// Parse text into records together with parsing statistics
    pub fn parse_with_stats(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let rows = split_rows(text, self.delimiter);

        // Row 0 is the header whatever it contains
        for row in rows.iter().skip(1) {
            stats.total_rows += 1;

            let fields = split_fields(row.text, self.delimiter);
            match normalize_record(&fields, &self.schema) {
                Ok(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                Err(reason) => {
                    stats.rows_skipped += 1;
                    debug!("Skipped line {}: {}", row.line_number, reason);
                    if self.mode == ParseMode::Diagnostic {
                        stats.skipped.push(SkippedRow {
                            line_number: row.line_number,
                            reason,
                        });
                    }
                }
            }
        }

        info!(
            "Parsed {} records from {} data rows ({} skipped)",
            stats.records_parsed, stats.total_rows, stats.rows_skipped
        );

        ParseResult { records, stats }
    }

    /// Parse raw bytes, failing only when they are not UTF-8 text
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<TourismRecord>> {
        Ok(self.parse_bytes_with_stats(bytes)?.records)
    }

    /// Parse raw bytes with statistics, failing only when they are not UTF-8 text
    pub fn parse_bytes_with_stats(&self, bytes: &[u8]) -> Result<ParseResult> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            Error::invalid_input(format!(
                "source is not valid UTF-8 text (invalid byte at offset {})",
                e.valid_up_to()
            ))
        })?;

        // Spreadsheet exports sometimes lead with a byte-order mark
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Ok(self.parse_with_stats(text))
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(RecordSchema::tourism())
    }
}

/// Parse text with the default layout and lenient mode
pub fn parse(text: &str) -> Vec<TourismRecord> {
    RecordParser::default().parse(text)
}
