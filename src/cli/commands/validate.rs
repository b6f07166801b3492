//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file.

use crate::config::{load_config_or_default, DEFAULT_CONFIG_PATH};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let display_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %display_path, "Validating configuration");

        println!("Validating configuration file: {display_path}");
        println!();

        // Loading validates as well
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Auto-load File: {}",
            config
                .registry
                .auto_load_path
                .as_deref()
                .unwrap_or("(none)")
        );
        println!("  Max ID Attempts: {}", config.registry.max_id_attempts);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_missing_explicit_file() {
        let args = ValidateArgs {};
        assert_eq!(args.execute(Some("/nonexistent/patrons.toml")).unwrap(), 2);
    }

    #[test]
    fn test_validate_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlocal_rotation = \"weekly\"").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(args.execute(Some(&path)).unwrap(), 2);
    }
}
