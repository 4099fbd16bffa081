//! Parse command: fetch the spreadsheet export and print its records

use super::shared::{CommandSummary, load_configuration, print_json};
use crate::app::models::TourismRecord;
use crate::app::services::loader::{DataSource, LoadedDataset, RecordLoader, ReloadOutcome};
use crate::cli::args::{OutputFormat, ParseArgs};
use anyhow::{Context, Result, bail};
use colored::*;
use tracing::{info, warn};

/// Run the parse command
pub async fn run_parse(args: &ParseArgs) -> Result<CommandSummary> {
    let config = load_configuration(args)?;
    let source = DataSource::parse(&config.source);
    let loader = RecordLoader::from_config(&config).context("Failed to build HTTP client")?;

    let dataset = match loader
        .reload(&source)
        .await
        .with_context(|| format!("Failed to load data from {}", source))?
    {
        ReloadOutcome::Applied(dataset) => dataset,
        ReloadOutcome::Superseded { generation, latest } => bail!(
            "reload {} was superseded by {}",
            generation.value(),
            latest.value()
        ),
    };

    info!(
        "Loaded {} records from {} ({} rows skipped)",
        dataset.records.len(),
        source,
        dataset.stats.rows_skipped
    );

    if dataset.stats.total_rows > 0 && !dataset.stats.is_successful() {
        warn!(
            "Only {:.1}% of rows produced records",
            dataset.stats.success_rate()
        );
    }

    report_skipped_rows(&dataset);

    match args.format {
        OutputFormat::Json => print_json(&dataset.records)?,
        OutputFormat::Table => print_table(&dataset.records, &config.origin_city),
    }

    Ok(CommandSummary {
        items_reported: dataset.records.len(),
        rows_skipped: dataset.stats.rows_skipped,
        ..CommandSummary::default()
    })
}

fn report_skipped_rows(dataset: &LoadedDataset) {
    for skipped in &dataset.stats.skipped {
        warn!("Line {} skipped: {}", skipped.line_number, skipped.reason);
    }
}

fn print_table(records: &[TourismRecord], origin_city: &str) {
    if records.is_empty() {
        println!("{}", "No valid records found.".bright_yellow());
        return;
    }

    for (i, record) in records.iter().enumerate() {
        let panel = record.info_panel(origin_city);
        let (lat, lng) = record.coordinates();

        println!(
            "{}. {} {}",
            (i + 1).to_string().bright_yellow().bold(),
            panel.title.bright_cyan().bold(),
            format!("({:.4}, {:.4})", lat, lng).bright_black()
        );
        println!("   {}", panel.origin_summary);
        if let Some(route) = &panel.route {
            println!("   Ruta: {}", route);
        }
        if let Some(link) = &panel.info_link {
            println!("   Más información: {}", link.underline());
        }
        if !panel.advisory.is_empty() {
            println!("   {} {}", "Consejos:".bright_green(), panel.advisory);
        }
    }
}
