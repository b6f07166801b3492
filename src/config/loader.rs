//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RegistryConfig;
use crate::domain::errors::RegistryError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file used when none is given explicitly
pub const DEFAULT_CONFIG_PATH: &str = "patrons.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RegistryConfig
/// 4. Applies environment variable overrides (PATRON_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use patron_registry::config::loader::load_config;
///
/// let config = load_config("patrons.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RegistryConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RegistryError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RegistryError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RegistryConfig = toml::from_str(&contents)
        .map_err(|e| RegistryError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads the given file, or the default file if present, or built-in defaults
///
/// An explicit path must exist. Without one, `patrons.toml` in the working
/// directory is used when present; otherwise defaults are used. Environment
/// overrides and validation apply in every case.
pub fn load_config_or_default(path: Option<&str>) -> Result<RegistryConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            let mut config = RegistryConfig::default();
            finish(&mut config)?;
            Ok(config)
        }
    }
}

fn finish(config: &mut RegistryConfig) -> Result<()> {
    apply_env_overrides(config);

    config.validate().map_err(|e| {
        RegistryError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(RegistryError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

/// Applies environment variable overrides using PATRON_* prefix
///
/// Environment variables follow the pattern: PATRON_<SECTION>_<KEY>
/// For example: PATRON_REGISTRY_AUTO_LOAD_PATH, PATRON_LOGGING_LOCAL_ENABLED
fn apply_env_overrides(config: &mut RegistryConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PATRON_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Registry overrides
    if let Ok(val) = std::env::var("PATRON_REGISTRY_AUTO_LOAD_PATH") {
        config.registry.auto_load_path = Some(val);
    }
    if let Ok(val) = std::env::var("PATRON_REGISTRY_MAX_ID_ATTEMPTS") {
        if let Ok(attempts) = val.parse() {
            config.registry.max_id_attempts = attempts;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PATRON_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PATRON_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PATRON_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
