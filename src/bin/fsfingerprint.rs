//! fsfingerprint CLI Binary
//!
//! Mirrors the configured filesystem roots into the SQLite node store.

use clap::Parser;
use fsfingerprint::cli::{format_using_config, map_error, Cli, RunContext};
use fsfingerprint::config::{ConfigLoader, FingerprintConfig};
use fsfingerprint::error::ApiError;
use fsfingerprint::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    apply_cli_overrides(&cli, &mut config);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("fsfingerprint starting");
    debug!(?config, "Effective configuration");

    let mut stdout = std::io::stdout();

    let context = match RunContext::open(&config, &mut stdout) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening database: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&mut stdout) {
        Ok(summary) => {
            let totals = summary.totals();
            info!(
                files_hashed = totals.files_hashed,
                files_failed = totals.files_failed,
                "Scan completed successfully"
            );
        }
        Err(e) => {
            error!("Scan failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Load the layered configuration, announcing every file that contributed.
fn load_config(cli: &Cli) -> Result<FingerprintConfig, ApiError> {
    if let Some(ref path) = cli.config {
        let config = ConfigLoader::load_from_file(path)?;
        println!("{}", format_using_config(path));
        return Ok(config);
    }

    let cwd = std::env::current_dir()
        .map_err(|e| ApiError::ConfigError(format!("Cannot determine working directory: {}", e)))?;
    let config = ConfigLoader::load(&cwd)?;
    for file in ConfigLoader::config_files(&cwd) {
        println!("{}", format_using_config(&file));
    }
    Ok(config)
}

/// CLI flags take precedence over every configuration layer.
/// `--root` replaces the configured roots rather than appending to them.
fn apply_cli_overrides(cli: &Cli, config: &mut FingerprintConfig) {
    if let Some(ref db) = cli.db {
        config.database = db.clone();
    }
    if !cli.roots.is_empty() {
        config.roots = cli.roots.clone();
    }
    if cli.debug {
        config.debug = true;
    }
}

/// Build logging configuration from the merged config and CLI flags.
/// Precedence: CLI flags override the debug switch override config values.
fn build_logging_config(cli: &Cli, config: &FingerprintConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if config.debug {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
