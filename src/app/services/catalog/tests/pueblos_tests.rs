//! Tests for the Pueblos Mágicos catalog

use super::*;
use crate::app::services::catalog::{MunicipalityCatalog, PueblosCatalog};

#[test]
fn test_parse_catalog_in_order() {
    let catalog = PueblosCatalog::from_json(&create_pueblos_json()).unwrap();

    let names: Vec<&str> = catalog.pueblos().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tapalpa", "Mazamitla", "Ajijic"]);
}

#[test]
fn test_find_is_case_insensitive() {
    let catalog = PueblosCatalog::from_json(&create_pueblos_json()).unwrap();

    let ajijic = catalog.find("  ajijic ").unwrap();
    assert_eq!(ajijic.municipality, "Chapala");
    assert!(catalog.find("Tlaquepaque").is_none());
}

#[test]
fn test_join_with_municipality_travel_info() {
    let pueblos = PueblosCatalog::from_json(&create_pueblos_json()).unwrap();
    let municipios = MunicipalityCatalog::from_json(&create_municipios_json()).unwrap();

    let joined = pueblos.with_travel(&municipios);

    assert_eq!(joined.len(), 3);
    assert_eq!(joined[0].travel.distance_km, "130");
    // Chapala is not in the municipality catalog
    assert!(joined[2].travel.is_unknown());
}

#[test]
fn test_blank_names_are_dropped() {
    let json = r#"{"pueblos_magicos": [
        {"nombre": " ", "lat": 1.0, "lng": 2.0, "municipio": "X"},
        {"nombre": "Talpa de Allende", "lat": 20.38, "lng": -104.82, "municipio": "Talpa de Allende"}
    ]}"#;

    let catalog = PueblosCatalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_load_from_file() {
    let file = create_temp_file(&create_pueblos_json());
    let catalog = PueblosCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
}

#[test]
fn test_joined_entry_serializes_flat() {
    let pueblos = PueblosCatalog::from_json(&create_pueblos_json()).unwrap();
    let joined = pueblos.with_travel(&MunicipalityCatalog::default());

    let value = serde_json::to_value(&joined[0]).unwrap();
    assert_eq!(value["nombre"], "Tapalpa");
    assert_eq!(value["travel"]["distancia_km"], "N/A");
}
