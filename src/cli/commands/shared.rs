//! Shared components for CLI commands
//!
//! This module contains logging setup, configuration loading and output helpers
//! used across the command implementations.

use crate::cli::args::{Args, ParseArgs};
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// Summary returned by every command
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Number of records or catalog entries reported
    pub items_reported: usize,
    /// Number of source rows skipped as malformed
    pub rows_skipped: usize,
    /// Wall-clock time spent in the command
    pub elapsed: Duration,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pueblos_processor={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        // Standard logging with timestamps
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &ParseArgs) -> Result<Config> {
    match &args.config {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, using defaults and environment"),
    }

    let mut config = Config::load_layered(args.config.as_deref())
        .context("Failed to load configuration")?;

    apply_cli_overrides(&mut config, args);

    // Validated once, after the last layer
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ParseArgs) {
    if let Some(source) = &args.source {
        config.source = source.clone();
    }
    if let Some(max_chars) = args.advisory_max {
        config.advisory_max_chars = max_chars;
    }
    if let Some(origin) = &args.origin {
        config.origin_city = origin.clone();
    }
    if args.diagnostics {
        config.diagnostics = true;
    }
}

/// Write a value as pretty JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("Failed to serialize output")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use tempfile::NamedTempFile;

    fn parse_args() -> ParseArgs {
        ParseArgs {
            source: None,
            format: OutputFormat::Table,
            diagnostics: false,
            advisory_max: None,
            origin: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = Config::default();
        let args = ParseArgs {
            source: Some("local.csv".to_string()),
            diagnostics: true,
            advisory_max: Some(40),
            origin: Some("Puerto Vallarta".to_string()),
            ..parse_args()
        };

        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.source, "local.csv");
        assert!(config.diagnostics);
        assert_eq!(config.advisory_max_chars, 40);
        assert_eq!(config.origin_city, "Puerto Vallarta");
    }

    #[test]
    fn test_cli_flag_repairs_config_file_value() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"advisory_max_chars": 0}}"#).unwrap();

        let args = ParseArgs {
            advisory_max: Some(50),
            config: Some(file.path().to_path_buf()),
            ..parse_args()
        };
        let config = load_configuration(&args).unwrap();
        assert_eq!(config.advisory_max_chars, 50);

        let without_flag = ParseArgs {
            config: Some(file.path().to_path_buf()),
            ..parse_args()
        };
        assert!(load_configuration(&without_flag).is_err());
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = Config::default().with_diagnostics(true);
        apply_cli_overrides(&mut config, &parse_args());

        assert_eq!(config, Config::default().with_diagnostics(true));
    }
}
