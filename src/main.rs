use clap::Parser;
use pueblos_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(anyhow::anyhow!("Interrupted by user"))
            }
        }
    });

    match result {
        Ok(_summary) => {
            // Success - output has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Pueblos Processor - Jalisco Tourism Data");
    println!("========================================");
    println!();
    println!("Parse the Pueblos Mágicos spreadsheet and municipality catalogs");
    println!("into validated records for the interactive map.");
    println!();
    println!("USAGE:");
    println!("    pueblos <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Fetch and parse the spreadsheet CSV export");
    println!("    municipio   Show travel distance and time for a municipality");
    println!("    magicos     List Pueblos Mágicos with travel info");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse the published spreadsheet:");
    println!("    pueblos parse");
    println!();
    println!("    # Parse a local export and list skipped rows:");
    println!("    pueblos parse pueblos.csv --diagnostics");
    println!();
    println!("    # Travel info for one municipality:");
    println!("    pueblos municipio Tapalpa --catalog municipios_info.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pueblos <COMMAND> --help");
}
