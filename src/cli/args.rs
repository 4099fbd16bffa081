//! Command-line argument definitions for the pueblos processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{DEFAULT_MUNICIPIOS_FILE, DEFAULT_ORIGIN_CITY, DEFAULT_PUEBLOS_FILE};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Jalisco tourism data processor
///
/// Parses the Pueblos Mágicos spreadsheet export and the municipality catalogs
/// into validated records for the interactive map.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pueblos",
    version,
    about = "Parse Jalisco Pueblos Mágicos and municipality tourism data",
    long_about = "Loads the Pueblos Mágicos spreadsheet (CSV export or local file), validates each \
                  row and prints the records that the interactive map would show. Also queries the \
                  municipality travel-info and Pueblos Mágicos JSON catalogs."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch and parse the spreadsheet CSV into tourism records
    Parse(ParseArgs),
    /// Show travel distance and time for one municipality
    Municipio(MunicipioArgs),
    /// List Pueblos Mágicos with their municipality travel info
    Magicos(MagicosArgs),
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// CSV source: local path or http(s) URL (defaults to the spreadsheet export)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Report the line number and reason of every skipped row
    #[arg(long)]
    pub diagnostics: bool,

    /// Maximum characters kept from the advisory column
    #[arg(long, value_name = "CHARS")]
    pub advisory_max: Option<usize>,

    /// City named in travel summaries
    #[arg(long, value_name = "CITY")]
    pub origin: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the municipio command
#[derive(Debug, Clone, Parser)]
pub struct MunicipioArgs {
    /// Municipality name as it appears in the catalog
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Municipality travel-info catalog
    #[arg(long, value_name = "FILE", default_value = DEFAULT_MUNICIPIOS_FILE)]
    pub catalog: PathBuf,

    /// Fail instead of showing N/A when the municipality is unknown
    #[arg(long)]
    pub strict: bool,

    /// City the catalog distances are measured from
    #[arg(long, value_name = "CITY", default_value = DEFAULT_ORIGIN_CITY)]
    pub origin: String,
}

/// Arguments for the magicos command
#[derive(Debug, Clone, Parser)]
pub struct MagicosArgs {
    /// Pueblos Mágicos catalog
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PUEBLOS_FILE)]
    pub catalog: PathBuf,

    /// Municipality travel-info catalog joined to each entry
    #[arg(long, value_name = "FILE")]
    pub municipios: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_defaults() {
        let args = Args::try_parse_from(["pueblos", "parse"]).unwrap();
        assert_eq!(args.get_log_level(), "info");

        match args.command {
            Some(Commands::Parse(parse)) => {
                assert_eq!(parse.source, None);
                assert_eq!(parse.format, OutputFormat::Table);
                assert!(!parse.diagnostics);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_command_flags() {
        let args = Args::try_parse_from([
            "pueblos",
            "parse",
            "datos.csv",
            "--format",
            "json",
            "--diagnostics",
            "--advisory-max",
            "80",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.get_log_level(), "debug");
        let Some(Commands::Parse(parse)) = args.command else {
            panic!("expected parse command");
        };
        assert_eq!(parse.source.as_deref(), Some("datos.csv"));
        assert_eq!(parse.format, OutputFormat::Json);
        assert!(parse.diagnostics);
        assert_eq!(parse.advisory_max, Some(80));
    }

    #[test]
    fn test_municipio_command_default_catalog() {
        let args = Args::try_parse_from(["pueblos", "-q", "municipio", "Tapalpa"]).unwrap();

        assert_eq!(args.get_log_level(), "warn");
        let Some(Commands::Municipio(municipio)) = args.command else {
            panic!("expected municipio command");
        };
        assert_eq!(municipio.name, "Tapalpa");
        assert_eq!(municipio.catalog, PathBuf::from("municipios_info.json"));
        assert_eq!(municipio.origin, "Guadalajara");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["pueblos", "-v", "-q", "parse"]).is_err());
    }
}
