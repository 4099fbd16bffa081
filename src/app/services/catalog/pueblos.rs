//! Pueblos Mágicos catalog
//!
//! Expected shape:
//!
//! ```json
//! { "pueblos_magicos": [ { "nombre": "Tapalpa", "lat": 19.95, "lng": -103.77, "municipio": "Tapalpa" } ] }
//! ```
//!
//! Clicking a Pueblo Mágico marker shows the travel info of its municipality,
//! so entries are usually consumed joined with a [`MunicipalityCatalog`].

use super::municipalities::MunicipalityCatalog;
use crate::app::models::{PuebloMagico, TravelInfo};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct PueblosFile {
    pueblos_magicos: Vec<PuebloMagico>,
}

/// A Pueblo Mágico together with its municipality's travel info
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuebloWithTravel {
    #[serde(flatten)]
    pub pueblo: PuebloMagico,
    pub travel: TravelInfo,
}

/// Ordered list of Pueblos Mágicos
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PueblosCatalog {
    pueblos: Vec<PuebloMagico>,
}

impl PueblosCatalog {
    /// Parse catalog JSON text, dropping entries with non-finite coordinates
    pub fn from_json(json: &str) -> Result<Self> {
        let file: PueblosFile = serde_json::from_str(json)
            .map_err(|e| Error::json("Invalid Pueblos Mágicos catalog", e))?;

        let pueblos = file
            .pueblos_magicos
            .into_iter()
            .filter(|pueblo| {
                let valid = pueblo.latitude.is_finite()
                    && pueblo.longitude.is_finite()
                    && !pueblo.name.trim().is_empty();
                if !valid {
                    warn!("Dropping Pueblo Mágico entry '{}'", pueblo.name);
                }
                valid
            })
            .collect();

        Ok(Self { pueblos })
    }

    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading Pueblos Mágicos catalog: {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        Self::from_json(&content)
    }

    pub fn pueblos(&self) -> &[PuebloMagico] {
        &self.pueblos
    }

    /// Case-insensitive lookup by Pueblo Mágico name
    pub fn find(&self, name: &str) -> Option<&PuebloMagico> {
        let wanted = name.trim().to_lowercase();
        self.pueblos
            .iter()
            .find(|pueblo| pueblo.name.to_lowercase() == wanted)
    }

    /// Join every entry with its municipality's travel info (`N/A` if unknown)
    pub fn with_travel(&self, municipalities: &MunicipalityCatalog) -> Vec<PuebloWithTravel> {
        self.pueblos
            .iter()
            .map(|pueblo| PuebloWithTravel {
                pueblo: pueblo.clone(),
                travel: municipalities.lookup(&pueblo.municipality),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pueblos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pueblos.is_empty()
    }
}
