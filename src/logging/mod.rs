//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels (`RUST_LOG` overrides)
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use patron_registry::logging::init_logging;
//! use patron_registry::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an ingestion batch
///
/// # Example
///
/// ```no_run
/// use patron_registry::log_ingest_start;
///
/// log_ingest_start!("patrons.txt");
/// ```
#[macro_export]
macro_rules! log_ingest_start {
    ($source:expr) => {
        tracing::info!(source = %$source, "Starting patron ingestion");
    };
}

/// Log the completion of an ingestion batch
///
/// # Example
///
/// ```no_run
/// use patron_registry::log_ingest_complete;
///
/// log_ingest_complete!("patrons.txt", 5, 2);
/// ```
#[macro_export]
macro_rules! log_ingest_complete {
    ($source:expr, $loaded:expr, $skipped:expr) => {
        tracing::info!(
            source = %$source,
            loaded = $loaded,
            skipped = $skipped,
            "Patron ingestion completed"
        );
    };
}

/// Log a skipped ingestion line
///
/// # Example
///
/// ```no_run
/// use patron_registry::log_line_skipped;
///
/// log_line_skipped!("patrons.txt", 3, "expected 4 comma-separated fields, found 3");
/// ```
#[macro_export]
macro_rules! log_line_skipped {
    ($source:expr, $line_number:expr, $reason:expr) => {
        tracing::warn!(
            source = %$source,
            line_number = $line_number,
            reason = %$reason,
            "Skipping patron line"
        );
    };
}
