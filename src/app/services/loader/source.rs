//! Raw data sources for the CSV export

use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where the CSV text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local file path
    File(PathBuf),
    /// `http://` or `https://` URL, e.g. a spreadsheet CSV export
    Url(String),
}

impl DataSource {
    /// Interpret a CLI/config string as a URL or file path
    pub fn parse(spec: &str) -> Self {
        let trimmed = spec.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }

    /// Read the whole source into memory
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<u8>> {
        match self {
            DataSource::File(path) => {
                debug!("Reading source file: {}", path.display());
                if !path.exists() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                tokio::fs::read(path)
                    .await
                    .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
            }
            DataSource::Url(url) => {
                info!("Fetching source URL: {}", url);
                let response = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| Error::fetch(url, "request failed", e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Error::http_status(url, status.as_u16()));
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| Error::fetch(url, "failed to read response body", e))?;
                debug!("Fetched {} bytes from {}", body.len(), url);
                Ok(body.to_vec())
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

impl From<&str> for DataSource {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}
