//! Magicos command: list Pueblos Mágicos with municipality travel info

use super::shared::{CommandSummary, print_json};
use crate::app::services::catalog::{MunicipalityCatalog, PueblosCatalog};
use crate::cli::args::{MagicosArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;

/// Run the magicos command
pub fn run_magicos(args: &MagicosArgs) -> Result<CommandSummary> {
    let pueblos = PueblosCatalog::load(&args.catalog)
        .with_context(|| format!("Failed to load {}", args.catalog.display()))?;

    let municipalities = match &args.municipios {
        Some(path) => MunicipalityCatalog::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => MunicipalityCatalog::default(),
    };

    let joined = pueblos.with_travel(&municipalities);

    match args.format {
        OutputFormat::Json => print_json(&joined)?,
        OutputFormat::Table => {
            println!("{}", "Pueblos Mágicos de Jalisco".bright_green().bold());
            println!();
            for (i, entry) in joined.iter().enumerate() {
                println!(
                    "  {}. {} {}",
                    (i + 1).to_string().bright_yellow().bold(),
                    entry.pueblo.name.bright_cyan(),
                    format!("[{}]", entry.pueblo.municipality).bright_black()
                );
                println!(
                    "     {} · {}",
                    entry.travel.distance_label(),
                    entry.travel.travel_time_label()
                );
            }
        }
    }

    Ok(CommandSummary {
        items_reported: joined.len(),
        ..CommandSummary::default()
    })
}
