//! Municipality travel-info catalog
//!
//! Expected shape:
//!
//! ```json
//! { "municipios": { "Tapalpa": { "distancia_km": 130, "tiempo_horas": 2, "tiempo_minutos": 120 } } }
//! ```

use crate::app::models::TravelInfo;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct MunicipiosFile {
    municipios: BTreeMap<String, TravelInfo>,
}

/// Travel information keyed by municipality name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MunicipalityCatalog {
    entries: BTreeMap<String, TravelInfo>,
}

impl MunicipalityCatalog {
    /// Parse catalog JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let file: MunicipiosFile = serde_json::from_str(json)
            .map_err(|e| Error::json("Invalid municipality catalog", e))?;

        debug!("Municipality catalog holds {} entries", file.municipios.len());
        Ok(Self {
            entries: file.municipios,
        })
    }

    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading municipality catalog: {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        Self::from_json(&content)
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<&TravelInfo> {
        self.entries.get(name)
    }

    /// Lookup that falls back to `N/A` values for unknown municipalities
    pub fn lookup(&self, name: &str) -> TravelInfo {
        self.get(name).cloned().unwrap_or_else(TravelInfo::unknown)
    }

    /// Lookup that treats an unknown municipality as an error
    pub fn require(&self, name: &str) -> Result<&TravelInfo> {
        self.get(name)
            .ok_or_else(|| Error::municipality_not_found(name))
    }

    /// Municipality names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
