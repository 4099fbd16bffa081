//! Municipio command: travel info for one municipality

use super::shared::CommandSummary;
use crate::app::models::TravelInfo;
use crate::app::services::catalog::MunicipalityCatalog;
use crate::cli::args::MunicipioArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::warn;

/// Run the municipio command
pub fn run_municipio(args: &MunicipioArgs) -> Result<CommandSummary> {
    let catalog = MunicipalityCatalog::load(&args.catalog)
        .with_context(|| format!("Failed to load {}", args.catalog.display()))?;

    let info = if args.strict {
        catalog.require(&args.name)?.clone()
    } else {
        let info = catalog.lookup(&args.name);
        if info.is_unknown() {
            warn!("'{}' is not in the catalog", args.name);
        }
        info
    };

    println!("{}", args.name.bright_cyan().bold());
    for line in travel_lines(&info, &args.origin) {
        println!("  {}", line);
    }

    Ok(CommandSummary {
        items_reported: 1,
        ..CommandSummary::default()
    })
}

fn travel_lines(info: &TravelInfo, origin: &str) -> [String; 2] {
    [
        format!("Distancia desde {}: {}", origin, info.distance_label()),
        format!("Tiempo estimado de viaje: {}", info.travel_time_label()),
    ]
}
