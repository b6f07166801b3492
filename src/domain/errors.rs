//! Domain error types
//!
//! This module defines the error hierarchy for the patron registry.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main registry error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Field validation errors (names, fines, identifiers)
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Every identifier in 1-9999 has been issued
    #[error("Patron ID space exhausted: all {issued} identifiers have been issued")]
    IdSpaceExhausted { issued: usize },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl RegistryError {
    /// Returns the message without the category prefix
    ///
    /// Used when the error is reported as the reason for a skipped record.
    pub fn reason(&self) -> String {
        match self {
            RegistryError::Configuration(msg)
            | RegistryError::Validation(msg)
            | RegistryError::Io(msg)
            | RegistryError::Serialization(msg)
            | RegistryError::Other(msg) => msg.clone(),
            RegistryError::IdSpaceExhausted { .. } => self.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        RegistryError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_validation_reason_has_no_prefix() {
        let err = RegistryError::Validation("bad name".to_string());
        assert_eq!(err.to_string(), "Validation error: bad name");
        assert_eq!(err.reason(), "bad name");
    }

    #[test]
    fn test_id_space_exhausted_display() {
        let err = RegistryError::IdSpaceExhausted { issued: 9999 };
        assert!(err.to_string().contains("9999"));
        assert_eq!(err.reason(), err.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RegistryError = io_err.into();
        assert!(matches!(err, RegistryError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RegistryError = json_err.into();
        assert!(matches!(err, RegistryError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RegistryError = toml_err.into();
        assert!(matches!(err, RegistryError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_registry_error_implements_std_error() {
        let err = RegistryError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
