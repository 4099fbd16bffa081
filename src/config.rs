//! Configuration management and validation.
//!
//! Provides the runtime configuration for fetching and parsing tourism data.
//! Values are layered: built-in defaults, then an optional JSON config file,
//! then environment variables, then CLI flags (applied by the CLI).

use crate::constants::{
    ADVISORY_MAX_CHARS, DEFAULT_DELIMITER, DEFAULT_ORIGIN_CITY, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SPREADSHEET_URL, ENV_ADVISORY_MAX, ENV_SOURCE, ENV_TIMEOUT_SECS, QUOTE_CHAR,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Runtime configuration for the loader and parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV source: local path or http(s) URL
    pub source: String,

    /// Field delimiter of the CSV export
    pub delimiter: char,

    /// Maximum characters kept from the advisory column
    pub advisory_max_chars: usize,

    /// Collect per-row skip reasons while parsing
    pub diagnostics: bool,

    /// HTTP timeout in seconds when the source is a URL
    pub request_timeout_secs: u64,

    /// City that travel summaries are measured from
    pub origin_city: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SPREADSHEET_URL.to_string(),
            delimiter: DEFAULT_DELIMITER,
            advisory_max_chars: ADVISORY_MAX_CHARS,
            diagnostics: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            origin_city: DEFAULT_ORIGIN_CITY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::json(format!("Invalid config file {}", path.display()), e))
    }

    /// Defaults, then config file, then process environment
    ///
    /// The result is not validated: callers layer their own overrides on top
    /// and call [`Config::validate`] once at the end.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
            self.source = source.trim().to_string();
        }

        if let Some(value) = lookup(ENV_ADVISORY_MAX) {
            self.advisory_max_chars = value.trim().parse().map_err(|_| {
                Error::configuration(format!("{} must be a whole number, got '{}'", ENV_ADVISORY_MAX, value))
            })?;
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = value.trim().parse().map_err(|_| {
                Error::configuration(format!("{} must be a whole number, got '{}'", ENV_TIMEOUT_SECS, value))
            })?;
        }

        Ok(())
    }

    /// Check that the configuration can drive a parse
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::configuration("source must not be empty"));
        }

        if self.delimiter == QUOTE_CHAR || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::configuration(format!(
                "delimiter {:?} conflicts with quoting or row splitting",
                self.delimiter
            )));
        }

        if self.advisory_max_chars == 0 {
            return Err(Error::configuration("advisory_max_chars must be greater than 0"));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::configuration("request_timeout_secs must be greater than 0"));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_advisory_max_chars(mut self, max_chars: usize) -> Self {
        self.advisory_max_chars = max_chars;
        self
    }
}
