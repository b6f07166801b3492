//! Core business logic for the patron registry.
//!
//! # Modules
//!
//! - [`registry`] - The patron registry and unique ID allocation
//! - [`ingest`] - Line parsing, skip reasons and batch reports
//! - [`validation`] - Name and overdue-fine checks
//! - [`events`] - Registry events and the sinks that receive them
//!
//! # Ingestion Workflow
//!
//! For each line of a data source:
//!
//! 1. **Split**: Comma-separate into exactly four trimmed fields
//! 2. **Parse**: Read the overdue fine as a decimal number
//! 3. **Validate**: Alphabetic names, non-negative fine
//! 4. **Bound**: Fine within $0-$250
//! 5. **Add**: Assign a unique ID and append the patron
//!
//! A failing line is skipped and reported; the batch continues. A read error
//! ends the batch and keeps what was already loaded.
//!
//! # Example
//!
//! ```rust,no_run
//! use patron_registry::core::events::ConsoleSink;
//! use patron_registry::core::registry::PatronRegistry;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = PatronRegistry::builder()
//!     .sink(ConsoleSink::stdout())
//!     .build();
//!
//! let report = registry.add_patrons_from_file("patrons.txt")?;
//! println!("Loaded: {}", report.loaded);
//! println!("Skipped: {}", report.skipped.len());
//!
//! for patron in registry.patrons() {
//!     println!("{patron}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod ingest;
pub mod registry;
pub mod validation;
