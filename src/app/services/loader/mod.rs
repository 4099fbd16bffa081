//! Fetching and reloading tourism data
//!
//! The parser never performs I/O; this module does. It fetches raw bytes from
//! a file or URL, runs them through a [`RecordParser`](crate::RecordParser)
//! and keeps the most recent dataset.
//!
//! - [`source`] - Local file or HTTP source of the CSV export
//! - [`reload`] - Generation-stamped reloads where the newest request wins

pub mod reload;
pub mod source;

#[cfg(test)]
pub mod tests;

pub use reload::{Generation, LoadedDataset, RecordLoader, ReloadOutcome};
pub use source::DataSource;
