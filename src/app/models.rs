//! Data models for Jalisco tourism data
//!
//! This module contains the core data structures produced by the parser and the
//! JSON catalogs, plus the information-panel view handed to a map front-end.

use crate::constants::{DEFAULT_ORIGIN_CITY, NOT_AVAILABLE};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Tourism Record
// =============================================================================

/// One validated tourism location parsed from the spreadsheet export
///
/// Records are built once per parse pass and handed to the caller by value.
/// Nothing in this crate mutates a record after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourismRecord {
    /// Opaque identifier from column 0, may be empty
    pub id: String,

    /// Display name, trimmed and never empty
    pub name: String,

    /// WGS84 latitude in decimal degrees
    pub latitude: f64,

    /// WGS84 longitude in decimal degrees
    pub longitude: f64,

    /// Safety and travel notes, already truncated
    pub advisory_text: String,

    /// Distance/time from the origin city as free text
    pub travel_summary: String,

    /// Route link, empty when absent
    pub route_url: String,

    /// More-information link, empty when absent
    pub info_url: String,
}

impl TourismRecord {
    /// Coordinates as a `(lat, lng)` pair for marker placement
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn has_route(&self) -> bool {
        !self.route_url.is_empty()
    }

    pub fn has_info_link(&self) -> bool {
        !self.info_url.is_empty()
    }

    /// Build the information panel shown when the marker is clicked
    pub fn info_panel(&self, origin_city: &str) -> InfoPanel {
        InfoPanel {
            title: self.name.clone(),
            origin_summary: format!("Desde {}: {}", origin_city, self.travel_summary),
            route: self.has_route().then(|| self.route_url.clone()),
            info_link: self.has_info_link().then(|| self.info_url.clone()),
            advisory: self.advisory_text.clone(),
        }
    }
}

// =============================================================================
// Information Panel
// =============================================================================

/// Structured content of the marker pop-up
///
/// Optional lines are `None` rather than empty strings so renderers can omit
/// the whole row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanel {
    pub title: String,
    pub origin_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_link: Option<String>,
    pub advisory: String,
}

impl InfoPanel {
    /// Panel for a record using the default origin city
    pub fn for_record(record: &TourismRecord) -> Self {
        record.info_panel(DEFAULT_ORIGIN_CITY)
    }
}

// =============================================================================
// Municipality Travel Info
// =============================================================================

/// Road distance and travel time from the origin city to a municipality
///
/// The source JSON mixes numbers and strings, so every value is kept as its
/// display text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TravelInfo {
    #[serde(rename = "distancia_km", default = "not_available", deserialize_with = "display_text")]
    pub distance_km: String,

    #[serde(rename = "tiempo_horas", default = "not_available", deserialize_with = "display_text")]
    pub hours: String,

    #[serde(rename = "tiempo_minutos", default = "not_available", deserialize_with = "display_text")]
    pub minutes: String,
}

impl TravelInfo {
    /// Placeholder for municipalities missing from the catalog
    pub fn unknown() -> Self {
        Self {
            distance_km: not_available(),
            hours: not_available(),
            minutes: not_available(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.distance_km == NOT_AVAILABLE && self.hours == NOT_AVAILABLE && self.minutes == NOT_AVAILABLE
    }

    /// e.g. "130 km en carretera"
    pub fn distance_label(&self) -> String {
        format!("{} km en carretera", self.distance_km)
    }

    /// e.g. "2 horas (120 minutos)"
    pub fn travel_time_label(&self) -> String {
        format!("{} horas ({} minutos)", self.hours, self.minutes)
    }
}

impl Default for TravelInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
    Null(()),
}

fn display_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) if s.trim().is_empty() => not_available(),
        NumberOrText::Text(s) => s.trim().to_string(),
        NumberOrText::Null(()) => not_available(),
    })
}

// =============================================================================
// Pueblo Mágico
// =============================================================================

/// Entry of the Pueblos Mágicos catalog
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PuebloMagico {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lng")]
    pub longitude: f64,

    /// Municipality whose travel info is shown when the marker is clicked
    #[serde(rename = "municipio")]
    pub municipality: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TourismRecord {
        TourismRecord {
            id: "1".to_string(),
            name: "Tapalpa".to_string(),
            latitude: 19.95,
            longitude: -103.77,
            advisory_text: "Zona segura".to_string(),
            travel_summary: "2h".to_string(),
            route_url: String::new(),
            info_url: "http://i".to_string(),
        }
    }

    #[test]
    fn test_info_panel_omits_empty_links() {
        let panel = InfoPanel::for_record(&sample_record());

        assert_eq!(panel.title, "Tapalpa");
        assert_eq!(panel.origin_summary, "Desde Guadalajara: 2h");
        assert_eq!(panel.route, None);
        assert_eq!(panel.info_link, Some("http://i".to_string()));
    }

    #[test]
    fn test_coordinates_are_lat_lng() {
        assert_eq!(sample_record().coordinates(), (19.95, -103.77));
    }

    #[test]
    fn test_travel_info_accepts_numbers_and_strings() {
        let info: TravelInfo = serde_json::from_str(
            r#"{"distancia_km": 130, "tiempo_horas": "2", "tiempo_minutos": 125.5}"#,
        )
        .unwrap();

        assert_eq!(info.distance_km, "130");
        assert_eq!(info.hours, "2");
        assert_eq!(info.minutes, "125.5");
        assert_eq!(info.distance_label(), "130 km en carretera");
        assert_eq!(info.travel_time_label(), "2 horas (125.5 minutos)");
    }

    #[test]
    fn test_travel_info_missing_values_default_to_na() {
        let info: TravelInfo = serde_json::from_str(r#"{"distancia_km": null}"#).unwrap();

        assert!(info.is_unknown());
        assert_eq!(info.travel_time_label(), "N/A horas (N/A minutos)");
    }

    #[test]
    fn test_pueblo_magico_uses_source_field_names() {
        let pueblo: PuebloMagico = serde_json::from_str(
            r#"{"nombre": "Mazamitla", "lat": 19.91, "lng": -103.03, "municipio": "Mazamitla"}"#,
        )
        .unwrap();

        assert_eq!(pueblo.name, "Mazamitla");
        assert_eq!(pueblo.latitude, 19.91);
        assert_eq!(pueblo.municipality, "Mazamitla");
    }
}
