//! Command implementations for the pueblos CLI
//!
//! Each subcommand lives in its own module:
//! - `parse`: fetch the spreadsheet and print validated records
//! - `municipio`: travel info for one municipality
//! - `magicos`: Pueblos Mágicos joined with municipality travel info

pub mod magicos;
pub mod municipio;
pub mod parse;
pub mod shared;

pub use shared::CommandSummary;

use crate::cli::args::{Args, Commands};
use anyhow::Result;
use std::time::Instant;

/// Main command runner
///
/// Sets up logging, then dispatches to the subcommand handler.
pub async fn run(args: Args) -> Result<CommandSummary> {
    shared::setup_logging(&args);
    let start_time = Instant::now();

    let mut summary = match args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(&parse_args).await?,
        Some(Commands::Municipio(municipio_args)) => municipio::run_municipio(&municipio_args)?,
        Some(Commands::Magicos(magicos_args)) => magicos::run_magicos(&magicos_args)?,
        None => CommandSummary::default(),
    };

    summary.elapsed = start_time.elapsed();
    Ok(summary)
}
