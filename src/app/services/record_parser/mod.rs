//! Spreadsheet CSV parser for Jalisco tourism records
//!
//! This module turns the raw CSV export of the Pueblos Mágicos spreadsheet into
//! validated [`TourismRecord`](crate::app::models::TourismRecord) values. It is
//! pure: text in, records out, no I/O.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Splits raw text into non-blank rows
//! - [`field_splitter`] - Quote-aware splitting of one row into fields
//! - [`schema`] - Declared positional layout of the export
//! - [`validator`] - Maps one field list onto a record or a skip reason
//! - [`parser`] - Pipeline orchestration and header handling
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use pueblos_processor::app::services::record_parser::RecordParser;
//!
//! let csv = "id,nombre,lat,lng,consejos,distancia,ruta,link\n\
//!            1,Tapalpa,19.95,-103.77,Zona segura,2h,http://r,http://i\n";
//!
//! let records = RecordParser::default().parse(csv);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "Tapalpa");
//! ```

pub mod field_splitter;
pub mod parser;
pub mod schema;
pub mod stats;
pub mod tokenizer;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_splitter::split_fields;
pub use parser::{ParseMode, RecordParser, parse};
pub use schema::{FieldRule, FieldSpec, RecordField, RecordSchema};
pub use stats::{ParseResult, ParseStats, SkipReason, SkippedRow};
pub use tokenizer::{RawRow, split_rows};
pub use validator::normalize_record;
