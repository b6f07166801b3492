//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::core::registry::DEFAULT_MAX_ID_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Registry behaviour
    #[serde(default)]
    pub registry: RegistrySettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RegistryConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.registry.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// File ingested when the registry is created, if it exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_load_path: Option<String>,

    /// Random draws per ID before falling back to a scan of free IDs
    #[serde(default = "default_max_id_attempts")]
    pub max_id_attempts: usize,
}

impl RegistrySettings {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.auto_load_path {
            if path.trim().is_empty() {
                return Err("registry.auto_load_path cannot be empty".to_string());
            }
        }
        if self.max_id_attempts == 0 {
            return Err("registry.max_id_attempts must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            auto_load_path: None,
            max_id_attempts: default_max_id_attempts(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_id_attempts() -> usize {
    DEFAULT_MAX_ID_ATTEMPTS
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
