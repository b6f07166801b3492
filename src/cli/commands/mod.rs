//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod load;
pub mod shell;
pub mod validate;
