//! Domain models and types for the patron registry.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatronId`])
//! - **Domain models** ([`Patron`])
//! - **Error types** ([`RegistryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use patron_registry::domain::{Patron, PatronId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let id = PatronId::new("17")?;
//! let patron = Patron::new(id, "Alice", "Smith", "1 Main St", 12.50)?;
//! assert_eq!(patron.full_name(), "Alice Smith");
//!
//! // Names must be purely alphabetic
//! assert!(Patron::new(PatronId::new("18")?, "Carl", "3", "Elm St", 10.0).is_err());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod patron;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::RegistryError;
pub use ids::{PatronId, MAX_PATRON_ID, MIN_PATRON_ID};
pub use patron::Patron;
pub use result::Result;
