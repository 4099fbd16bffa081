//! Pueblos Processor Library
//!
//! A Rust library for turning the Jalisco tourism spreadsheet (Pueblos Mágicos and
//! municipalities) into validated, typed records ready for a map front-end.
//!
//! This library provides tools for:
//! - Parsing the spreadsheet CSV export with quote-aware field splitting
//! - Normalizing rows through a declared positional schema
//! - Tolerant row handling with optional skip diagnostics
//! - Loading municipality travel info and the Pueblos Mágicos catalog from JSON
//! - Fetching sources from disk or HTTP with latest-reload-wins coordination

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod loader;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{InfoPanel, PuebloMagico, TourismRecord, TravelInfo};
pub use app::services::record_parser::{ParseMode, RecordParser};
pub use config::Config;

/// Result type alias for the pueblos processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and parsing tourism data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input could not be read as text at all
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed before a response was received
    #[error("Fetch error for '{url}': {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP response carried a non-success status
    #[error("HTTP {status} while fetching '{url}'")]
    HttpStatus { url: String, status: u16 },

    /// JSON decoding error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Municipality missing from the travel catalog
    #[error("Municipality not found: {name}")]
    MunicipalityNotFound { name: String },
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error with context
    pub fn fetch(url: impl Into<String>, message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a JSON decoding error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a municipality not found error
    pub fn municipality_not_found(name: impl Into<String>) -> Self {
        Self::MunicipalityNotFound { name: name.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON decoding failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Fetch {
            url,
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}
