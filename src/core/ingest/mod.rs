//! Patron ingestion from delimited text
//!
//! This module provides:
//! - Record line splitting for any line ending ([`RecordLines`])
//! - Field splitting and per-field validation ([`parse_line`])
//! - Skip reasons for rejected lines ([`LineRejection`])
//! - Batch summaries ([`IngestReport`])
//!
//! The batch loop itself lives on
//! [`PatronRegistry`](crate::core::registry::PatronRegistry), which owns ID
//! generation and the patron list.

pub mod lines;
pub mod parse;
pub mod report;

pub use lines::RecordLines;
pub use parse::{parse_line, split_fields, trim_field, LineRejection, PatronRecord, FIELD_COUNT};
pub use report::{IngestReport, SkippedLine};
