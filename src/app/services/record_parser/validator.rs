//! Row validation and normalization
//!
//! Maps the field list of one data row onto a [`TourismRecord`] following a
//! [`RecordSchema`]. Rows that do not fit are reported as a [`SkipReason`]; the
//! caller decides whether that is worth logging.

use super::schema::{FieldRule, RecordField, RecordSchema};
use super::stats::SkipReason;
use crate::app::models::TourismRecord;

/// Normalized value of one field
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Number(f64),
}

/// Convert one row's fields into a record, or explain why not
pub fn normalize_record(
    fields: &[String],
    schema: &RecordSchema,
) -> Result<TourismRecord, SkipReason> {
    if fields.len() < schema.min_fields {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
            expected: schema.min_fields,
        });
    }

    let mut builder = RecordBuilder::default();

    for spec in &schema.fields {
        // Columns past the end are optional values defaulting to empty
        let raw = fields.get(spec.column).map(String::as_str).unwrap_or("");
        let value = apply_rule(spec.field, spec.rule, raw)?;

        if spec.required && matches!(&value, FieldValue::Text(text) if text.is_empty()) {
            return Err(SkipReason::missing_required(spec.field));
        }

        builder
            .set(spec.field, value)
            .map_err(|_| SkipReason::schema_mismatch(spec.field, spec.rule))?;
    }

    builder.build()
}

fn apply_rule(field: RecordField, rule: FieldRule, raw: &str) -> Result<FieldValue, SkipReason> {
    Ok(match rule {
        FieldRule::Verbatim => FieldValue::Text(raw.to_string()),
        FieldRule::Trimmed => FieldValue::Text(raw.trim().to_string()),
        FieldRule::Truncated(max_chars) => FieldValue::Text(truncate_chars(raw.trim(), max_chars)),
        FieldRule::Coordinate => FieldValue::Number(parse_coordinate(field, raw)?),
    })
}

/// Keep at most `max_chars` characters, no ellipsis
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

fn parse_coordinate(field: RecordField, raw: &str) -> Result<f64, SkipReason> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| SkipReason::invalid_coordinate(field, trimmed))
}

#[derive(Debug, Default)]
struct RecordBuilder {
    id: Option<String>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    advisory_text: Option<String>,
    travel_summary: Option<String>,
    route_url: Option<String>,
    info_url: Option<String>,
}

impl RecordBuilder {
    /// Store a value; `Err` when its kind does not fit the field
    fn set(&mut self, field: RecordField, value: FieldValue) -> Result<(), FieldValue> {
        match (field, value) {
            (RecordField::Latitude, FieldValue::Number(n)) => self.latitude = Some(n),
            (RecordField::Longitude, FieldValue::Number(n)) => self.longitude = Some(n),
            (RecordField::Id, FieldValue::Text(s)) => self.id = Some(s),
            (RecordField::Name, FieldValue::Text(s)) => self.name = Some(s),
            (RecordField::AdvisoryText, FieldValue::Text(s)) => self.advisory_text = Some(s),
            (RecordField::TravelSummary, FieldValue::Text(s)) => self.travel_summary = Some(s),
            (RecordField::RouteUrl, FieldValue::Text(s)) => self.route_url = Some(s),
            (RecordField::InfoUrl, FieldValue::Text(s)) => self.info_url = Some(s),
            (_, value) => return Err(value),
        }
        Ok(())
    }

    fn build(self) -> Result<TourismRecord, SkipReason> {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| SkipReason::missing_required(RecordField::Name))?;
        let latitude = self
            .latitude
            .ok_or_else(|| SkipReason::invalid_coordinate(RecordField::Latitude, ""))?;
        let longitude = self
            .longitude
            .ok_or_else(|| SkipReason::invalid_coordinate(RecordField::Longitude, ""))?;

        Ok(TourismRecord {
            id: self.id.unwrap_or_default(),
            name,
            latitude,
            longitude,
            advisory_text: self.advisory_text.unwrap_or_default(),
            travel_summary: self.travel_summary.unwrap_or_default(),
            route_url: self.route_url.unwrap_or_default(),
            info_url: self.info_url.unwrap_or_default(),
        })
    }
}
