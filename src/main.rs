// Patron Registry - Library Patron Management
// Copyright (c) 2025 Patron Registry Contributors
// Licensed under the MIT License

use clap::Parser;
use patron_registry::cli::{Cli, Commands};
use patron_registry::config::{load_config_or_default, LoggingConfig};
use patron_registry::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration errors are reported after logging is up
    let config = load_config_or_default(cli.config.as_deref());

    let (log_level, logging_config) = match &config {
        Ok(c) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| c.application.log_level.clone()),
            c.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "warn".to_string()),
            LoggingConfig::default(),
        ),
    };

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Patron Registry - Library Patron Management"
    );

    let exit_code = match execute_command(&cli, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(
    cli: &Cli,
    config: patron_registry::domain::Result<patron_registry::config::RegistryConfig>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()),
        Commands::Init(args) => args.execute(),
        Commands::Shell(args) => match config {
            Ok(config) => args.execute(&config),
            Err(e) => Ok(report_config_error(&e)),
        },
        Commands::Load(args) => match config {
            Ok(config) => args.execute(&config),
            Err(e) => Ok(report_config_error(&e)),
        },
    }
}

fn report_config_error(error: &patron_registry::domain::RegistryError) -> i32 {
    tracing::error!(error = %error, "Failed to load configuration");
    eprintln!("Error: {error}");
    2 // Configuration error exit code
}
