//! Patron registry and ID allocation
//!
//! - [`PatronRegistry`] - owns the patron list, adds, removes and ingests
//! - [`RegistryBuilder`] - injects the random source, event sink and auto-load file
//! - [`IdAllocator`] - issues IDs 1-9999 that are never reused

pub mod allocator;
pub mod patron_registry;

pub use allocator::{IdAllocator, DEFAULT_MAX_ID_ATTEMPTS, ID_SPACE};
pub use patron_registry::{PatronRegistry, RegistryBuilder};
