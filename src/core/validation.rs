//! Patron field validation
//!
//! Two separate checks exist and are applied in this order:
//! [`validate_patron`] (alphabetic names, non-negative fine) and
//! [`check_fine_range`] (fine within `[0, MAX_OVERDUE_FINE]`).

use crate::domain::patron::is_valid_name;
use crate::domain::{RegistryError, Result};

/// Largest overdue fine accepted at ingestion and manual entry
pub const MAX_OVERDUE_FINE: f64 = 250.0;

/// Validates raw patron fields
///
/// The address is never validated.
///
/// # Errors
///
/// Returns [`RegistryError::Validation`] when either name contains anything
/// other than ASCII letters, or when the fine is negative.
///
/// # Examples
///
/// ```
/// use patron_registry::core::validation::validate_patron;
///
/// assert!(validate_patron("Alice", "Smith", "1 Main St", 12.5).is_ok());
/// assert!(validate_patron("Carl", "3", "Elm St", 10.0).is_err());
/// assert!(validate_patron("Dana", "Lee", "", -1.0).is_err());
/// // The upper bound is a separate check
/// assert!(validate_patron("Bob", "Jones", "2 Oak Ave", 300.0).is_ok());
/// ```
pub fn validate_patron(
    first_name: &str,
    last_name: &str,
    _address: &str,
    overdue_fine: f64,
) -> Result<()> {
    if !is_valid_name(first_name) || !is_valid_name(last_name) {
        return Err(RegistryError::Validation(
            "First and last names can only contain alphabetic characters.".to_string(),
        ));
    }
    if overdue_fine < 0.0 {
        return Err(RegistryError::Validation(
            "Overdue fine must be a non-negative number.".to_string(),
        ));
    }
    Ok(())
}

/// True when the fine lies in `[0, MAX_OVERDUE_FINE]`; NaN is out of range
pub fn check_fine_range(overdue_fine: f64) -> bool {
    (0.0..=MAX_OVERDUE_FINE).contains(&overdue_fine)
}
