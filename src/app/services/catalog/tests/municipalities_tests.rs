//! Tests for the municipality travel-info catalog

use super::*;
use crate::Error;
use crate::app::services::catalog::MunicipalityCatalog;
use std::path::Path;

#[test]
fn test_lookup_known_municipality() {
    let catalog = MunicipalityCatalog::from_json(&create_municipios_json()).unwrap();

    let tapalpa = catalog.lookup("Tapalpa");
    assert_eq!(tapalpa.distance_label(), "130 km en carretera");
    assert_eq!(tapalpa.travel_time_label(), "2 horas (120 minutos)");

    // String-valued entries read the same as numeric ones
    assert_eq!(catalog.lookup("Mazamitla").distance_km, "128");
}

#[test]
fn test_lookup_unknown_municipality_falls_back_to_na() {
    let catalog = MunicipalityCatalog::from_json(&create_municipios_json()).unwrap();

    let info = catalog.lookup("Zapotlanejo");
    assert!(info.is_unknown());
    assert_eq!(info.distance_label(), "N/A km en carretera");
    assert!(catalog.get("Zapotlanejo").is_none());
}

#[test]
fn test_require_unknown_municipality_errors() {
    let catalog = MunicipalityCatalog::from_json(&create_municipios_json()).unwrap();

    assert!(catalog.require("Tequila").is_ok());
    assert!(matches!(
        catalog.require("Zapotlanejo"),
        Err(Error::MunicipalityNotFound { .. })
    ));
}

#[test]
fn test_partial_entry_fills_missing_values() {
    let catalog = MunicipalityCatalog::from_json(&create_municipios_json()).unwrap();

    let tequila = catalog.lookup("Tequila");
    assert_eq!(tequila.distance_km, "60");
    assert_eq!(tequila.hours, "N/A");
    assert_eq!(tequila.minutes, "N/A");
}

#[test]
fn test_names_are_sorted() {
    let catalog = MunicipalityCatalog::from_json(&create_municipios_json()).unwrap();

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Mazamitla", "Tapalpa", "Tequila"]);
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_load_from_file() {
    let file = create_temp_file(&create_municipios_json());
    let catalog = MunicipalityCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        MunicipalityCatalog::load(Path::new("/no/such/municipios.json")),
        Err(Error::FileNotFound { .. })
    ));
    assert!(matches!(
        MunicipalityCatalog::from_json(r#"{"otra_cosa": {}}"#),
        Err(Error::Json { .. })
    ));
}
