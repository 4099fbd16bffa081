//! Test fixtures for the JSON catalogs

use std::io::Write;
use tempfile::NamedTempFile;

mod municipalities_tests;
mod pueblos_tests;

pub fn create_municipios_json() -> String {
    r#"{
  "municipios": {
    "Tapalpa": { "distancia_km": 130, "tiempo_horas": 2, "tiempo_minutos": 120 },
    "Mazamitla": { "distancia_km": "128", "tiempo_horas": "2", "tiempo_minutos": "115" },
    "Tequila": { "distancia_km": 60 }
  }
}"#
    .to_string()
}

pub fn create_pueblos_json() -> String {
    r#"{
  "pueblos_magicos": [
    { "nombre": "Tapalpa", "lat": 19.95, "lng": -103.77, "municipio": "Tapalpa" },
    { "nombre": "Mazamitla", "lat": 19.91, "lng": -103.03, "municipio": "Mazamitla" },
    { "nombre": "Ajijic", "lat": 20.30, "lng": -103.26, "municipio": "Chapala" }
  ]
}"#
    .to_string()
}

/// Write content to a temporary file
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
