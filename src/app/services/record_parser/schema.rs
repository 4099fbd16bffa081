//! Declared positional layout of the spreadsheet export
//!
//! The export has no usable header, so columns are identified by position. The
//! layout lives here, in one place, instead of as index literals in the
//! validator.

use crate::constants::{ADVISORY_MAX_CHARS, MIN_FIELDS_PER_ROW, columns};
use std::fmt;

/// Record fields that can be populated from a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Name,
    Latitude,
    Longitude,
    AdvisoryText,
    TravelSummary,
    RouteUrl,
    InfoUrl,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Name => "name",
            RecordField::Latitude => "latitude",
            RecordField::Longitude => "longitude",
            RecordField::AdvisoryText => "advisory_text",
            RecordField::TravelSummary => "travel_summary",
            RecordField::RouteUrl => "route_url",
            RecordField::InfoUrl => "info_url",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a raw field value is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Kept exactly as split
    Verbatim,
    /// Surrounding whitespace removed
    Trimmed,
    /// Trimmed, then cut to at most this many characters
    Truncated(usize),
    /// Trimmed and parsed as a finite `f64`
    Coordinate,
}

/// One column of the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: RecordField,
    pub column: usize,
    pub rule: FieldRule,
    /// Row is rejected when a required value is empty or unparseable
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(field: RecordField, column: usize, rule: FieldRule, required: bool) -> Self {
        Self {
            field,
            column,
            rule,
            required,
        }
    }
}

/// Complete row layout: field specs plus the minimum field count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub fields: Vec<FieldSpec>,
    pub min_fields: usize,
}

impl RecordSchema {
    /// Layout of the Pueblos Mágicos spreadsheet export
    pub fn tourism() -> Self {
        Self::tourism_with_advisory_limit(ADVISORY_MAX_CHARS)
    }

    /// Same layout with a custom advisory truncation length
    pub fn tourism_with_advisory_limit(advisory_max_chars: usize) -> Self {
        use FieldRule::*;
        use RecordField::*;

        Self {
            fields: vec![
                FieldSpec::new(Id, columns::ID, Verbatim, false),
                FieldSpec::new(Name, columns::NAME, Trimmed, true),
                FieldSpec::new(Latitude, columns::LATITUDE, Coordinate, true),
                FieldSpec::new(Longitude, columns::LONGITUDE, Coordinate, true),
                FieldSpec::new(
                    AdvisoryText,
                    columns::ADVISORY,
                    Truncated(advisory_max_chars),
                    false,
                ),
                FieldSpec::new(TravelSummary, columns::TRAVEL_SUMMARY, Trimmed, false),
                FieldSpec::new(RouteUrl, columns::ROUTE_URL, Trimmed, false),
                FieldSpec::new(InfoUrl, columns::INFO_URL, Trimmed, false),
            ],
            min_fields: MIN_FIELDS_PER_ROW,
        }
    }

    /// Look up the spec for a field
    pub fn spec(&self, field: RecordField) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }

    /// Highest column index referenced plus one
    pub fn width(&self) -> usize {
        self.fields
            .iter()
            .map(|spec| spec.column + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self::tourism()
    }
}
