//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Patron Registry - library patron management
#[derive(Parser, Debug)]
#[command(name = "patron-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to patrons.toml if present)
    #[arg(short, long, env = "PATRON_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PATRON_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive patron management menu
    Shell(commands::shell::ShellArgs),

    /// Load patron files and list the result
    Load(commands::load::LoadArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
