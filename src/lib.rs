// Patron Registry - Library Patron Management
// Copyright (c) 2025 Patron Registry Contributors
// Licensed under the MIT License

//! # Patron Registry
//!
//! An in-memory registry of library patrons with validated bulk ingestion
//! from delimited text files.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Registering** patrons with unique IDs in 1-9999 that are never reused
//! - **Ingesting** patrons from `firstName,lastName,address,overdueFine` files,
//!   skipping and reporting bad lines without aborting the batch
//! - **Validating** alphabetic names and overdue fines within $0-$250
//! - **Reporting** every outcome through a pluggable event sink
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and the interactive menu
//! - [`core`] - Registry, ingestion, validation and events
//! - [`domain`] - Patron model, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use patron_registry::config::load_config;
//! use patron_registry::core::events::ConsoleSink;
//! use patron_registry::core::registry::PatronRegistry;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("patrons.toml")?;
//!
//!     // Auto-loads the configured patron file if it exists
//!     let mut registry = PatronRegistry::from_config(&config, ConsoleSink::stdout());
//!
//!     let report = registry.add_patrons_from_file("more-patrons.txt")?;
//!     println!("Loaded {} patrons, skipped {}", report.loaded, report.skipped.len());
//!
//!     registry.remove_patron("1042");
//!     for patron in registry.patrons() {
//!         println!("{patron}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Deterministic IDs
//!
//! The random source is injectable, which makes ID sequences reproducible:
//!
//! ```rust
//! use patron_registry::core::registry::PatronRegistry;
//! use patron_registry::core::events::EventLog;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut a = PatronRegistry::builder().rng(StdRng::seed_from_u64(3)).sink(EventLog::new()).build();
//! let mut b = PatronRegistry::builder().rng(StdRng::seed_from_u64(3)).sink(EventLog::new()).build();
//! assert_eq!(a.generate_unique_id().unwrap(), b.generate_unique_id().unwrap());
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with [`domain::RegistryError`].
//! Bad ingestion lines are not errors; they are reported as
//! [`core::ingest::LineRejection`] values inside the [`core::ingest::IngestReport`].

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
