//! Static JSON catalogs shown alongside the spreadsheet records
//!
//! Two small data files ship with the map:
//! - [`municipalities`] - road distance and travel time per municipality
//!   (`municipios_info.json`)
//! - [`pueblos`] - the Pueblos Mágicos marker list (`pueblos_magicos.json`)
//!
//! Both are read whole into memory and queried by name.

pub mod municipalities;
pub mod pueblos;

#[cfg(test)]
pub mod tests;

pub use municipalities::MunicipalityCatalog;
pub use pueblos::{PuebloWithTravel, PueblosCatalog};
