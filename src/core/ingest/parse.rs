//! Line parsing for patron ingestion
//!
//! A record is `firstName,lastName,address,overdueFine`. Fields are split on
//! commas without escaping and trimmed of surrounding ASCII whitespace and
//! control characters. Trailing empty fields are discarded before counting.

use crate::core::validation::{check_fine_range, validate_patron};
use thiserror::Error;

/// Number of fields in a patron record
pub const FIELD_COUNT: usize = 4;

/// Reason an ingestion line was skipped
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineRejection {
    /// Wrong number of comma-separated fields
    #[error("expected 4 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    /// The fine field is not a decimal number
    #[error("invalid fine amount '{value}'")]
    InvalidFine { value: String },

    /// Name or fine validation failed
    #[error("{0}")]
    Invalid(String),

    /// The fine is outside `[0, 250]`
    #[error("Overdue fine for {first_name} {last_name} must be between $0 and $250. Patron not added.")]
    FineOutOfRange {
        first_name: String,
        last_name: String,
        fine: f64,
    },
}

impl LineRejection {
    /// True for malformed lines, false for well-formed lines with invalid values
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            LineRejection::FieldCount { .. } | LineRejection::InvalidFine { .. }
        )
    }
}

/// Fields of one accepted line, ready to receive an ID
#[derive(Debug, Clone, PartialEq)]
pub struct PatronRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub overdue_fine: f64,
}

/// Splits a line on commas, dropping trailing empty fields
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Strips leading and trailing characters at or below U+0020
///
/// Other Unicode whitespace, such as a no-break space, is kept and then fails
/// the name check.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}

/// Parses and validates one line
///
/// Checks run in a fixed order: field count, fine format, name/fine
/// validation, fine range. The first failure is returned.
///
/// # Examples
///
/// ```
/// use patron_registry::core::ingest::{parse_line, LineRejection};
///
/// let record = parse_line(" Alice , Smith , 1 Main St , 12.50 ").unwrap();
/// assert_eq!(record.first_name, "Alice");
/// assert_eq!(record.overdue_fine, 12.5);
///
/// assert!(matches!(
///     parse_line("Bob,Jones,2 Oak Ave,300"),
///     Err(LineRejection::FineOutOfRange { .. })
/// ));
/// ```
pub fn parse_line(line: &str) -> Result<PatronRecord, LineRejection> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(LineRejection::FieldCount {
            found: fields.len(),
        });
    }

    let first_name = trim_field(fields[0]);
    let last_name = trim_field(fields[1]);
    let address = trim_field(fields[2]);
    let fine_field = trim_field(fields[3]);

    let overdue_fine: f64 = fine_field
        .parse()
        .map_err(|_| LineRejection::InvalidFine {
            value: fine_field.to_string(),
        })?;

    validate_patron(first_name, last_name, address, overdue_fine)
        .map_err(|e| LineRejection::Invalid(e.reason()))?;

    if !check_fine_range(overdue_fine) {
        return Err(LineRejection::FineOutOfRange {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            fine: overdue_fine,
        });
    }

    Ok(PatronRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: address.to_string(),
        overdue_fine,
    })
}
