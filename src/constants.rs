//! Application constants for the pueblos processor
//!
//! Default sources, column layout and display strings shared across the
//! parser, catalogs and CLI.

// =============================================================================
// Data Sources
// =============================================================================

/// Google Sheets CSV export holding the Pueblos Mágicos data set
pub const DEFAULT_SPREADSHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1x8jI4RYM6nvhydMfxBn68x7shxyEuf_KWNC0iDq8mzw/export?format=csv&gid=0";

/// Default municipality travel-info catalog file
pub const DEFAULT_MUNICIPIOS_FILE: &str = "municipios_info.json";

/// Default Pueblos Mágicos catalog file
pub const DEFAULT_PUEBLOS_FILE: &str = "pueblos_magicos.json";

/// Default HTTP timeout for fetching a source
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// CSV Layout
// =============================================================================

/// Field delimiter used by the spreadsheet export
pub const DEFAULT_DELIMITER: char = ',';

/// Quote character for escaped fields
pub const QUOTE_CHAR: char = '"';

/// Rows with fewer fields than this are skipped
pub const MIN_FIELDS_PER_ROW: usize = 8;

/// Maximum characters kept from the advisory column
pub const ADVISORY_MAX_CHARS: usize = 150;

/// Fixed column positions in the spreadsheet export
pub mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const LATITUDE: usize = 2;
    pub const LONGITUDE: usize = 3;
    pub const ADVISORY: usize = 4;
    pub const TRAVEL_SUMMARY: usize = 5;
    pub const ROUTE_URL: usize = 6;
    pub const INFO_URL: usize = 7;
}

// =============================================================================
// Display
// =============================================================================

/// Origin city that travel summaries are measured from
pub const DEFAULT_ORIGIN_CITY: &str = "Guadalajara";

/// Placeholder shown for unknown travel information
pub const NOT_AVAILABLE: &str = "N/A";

/// Success threshold (percent of rows parsed) for a healthy data set
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;

// =============================================================================
// Environment
// =============================================================================

/// Environment variable overriding the CSV source
pub const ENV_SOURCE: &str = "PUEBLOS_SOURCE";

/// Environment variable overriding the advisory truncation length
pub const ENV_ADVISORY_MAX: &str = "PUEBLOS_ADVISORY_MAX";

/// Environment variable overriding the HTTP timeout
pub const ENV_TIMEOUT_SECS: &str = "PUEBLOS_TIMEOUT_SECS";
