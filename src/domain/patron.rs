//! Patron domain model
//!
//! A patron is a library member record. It is validated once on construction
//! and has no mutation methods afterwards.

use super::errors::RegistryError;
use super::ids::PatronId;
use super::result::Result;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns true when `name` is non-empty and made only of ASCII letters
///
/// # Examples
///
/// ```
/// use patron_registry::domain::patron::is_valid_name;
///
/// assert!(is_valid_name("Alice"));
/// assert!(!is_valid_name("O'Brien"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[a-zA-Z]+$").unwrap())
        .is_match(name)
}

/// A library patron
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patron {
    id: PatronId,
    first_name: String,
    last_name: String,
    address: String,
    overdue_fine: f64,
}

impl Patron {
    /// Creates a new patron
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if either name contains anything
    /// other than ASCII letters, or if the fine is negative.
    pub fn new(
        id: PatronId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        overdue_fine: f64,
    ) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if !is_valid_name(&first_name) || !is_valid_name(&last_name) {
            return Err(RegistryError::Validation(
                "First name and last name must be alphabetic characters only.".to_string(),
            ));
        }
        if overdue_fine.is_nan() || overdue_fine < 0.0 {
            return Err(RegistryError::Validation(
                "Overdue fine must be a non-negative number.".to_string(),
            ));
        }

        Ok(Self {
            id,
            first_name,
            last_name,
            address: address.into(),
            overdue_fine,
        })
    }

    pub fn id(&self) -> &PatronId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn overdue_fine(&self) -> f64 {
        self.overdue_fine
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patron ID: {}, Name: {} {}, Address: {}, Overdue Fine: ${:.2}",
            self.id, self.first_name, self.last_name, self.address, self.overdue_fine
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn id(value: &str) -> PatronId {
        PatronId::new(value).unwrap()
    }

    #[test]
    fn test_patron_creation() {
        let patron = Patron::new(id("12"), "Alice", "Smith", "1 Main St", 12.5).unwrap();
        assert_eq!(patron.id().as_str(), "12");
        assert_eq!(patron.first_name(), "Alice");
        assert_eq!(patron.last_name(), "Smith");
        assert_eq!(patron.address(), "1 Main St");
        assert_eq!(patron.overdue_fine(), 12.5);
        assert_eq!(patron.full_name(), "Alice Smith");
    }

    #[test_case("alice" ; "lowercase")]
    #[test_case("ALICE" ; "uppercase")]
    #[test_case("x" ; "single letter")]
    #[test_case("McDonald" ; "mixed case")]
    fn test_valid_names(name: &str) {
        assert!(is_valid_name(name));
    }

    #[test_case("" ; "empty")]
    #[test_case("Mary Ann" ; "space")]
    #[test_case("R2D2" ; "digits")]
    #[test_case("Smith-Jones" ; "hyphen")]
    #[test_case("Zoë" ; "non ascii letter")]
    #[test_case(" Alice" ; "leading whitespace")]
    fn test_invalid_names(name: &str) {
        assert!(!is_valid_name(name));
    }

    #[test]
    fn test_patron_rejects_invalid_last_name() {
        let err = Patron::new(id("1"), "Carl", "3", "Elm St", 10.0).unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[test]
    fn test_patron_rejects_negative_or_nan_fine() {
        assert!(Patron::new(id("1"), "Dana", "Lee", "", -0.01).is_err());
        assert!(Patron::new(id("1"), "Dana", "Lee", "", f64::NAN).is_err());
        assert!(Patron::new(id("1"), "Dana", "Lee", "", 0.0).is_ok());
    }

    #[test]
    fn test_address_is_free_form() {
        let patron = Patron::new(id("5"), "Eve", "Stone", "#4, Apt. 9 / Rear!", 0.0).unwrap();
        assert_eq!(patron.address(), "#4, Apt. 9 / Rear!");
    }

    #[test]
    fn test_patron_display() {
        let patron = Patron::new(id("77"), "Alice", "Smith", "1 Main St", 12.5).unwrap();
        assert_eq!(
            patron.to_string(),
            "Patron ID: 77, Name: Alice Smith, Address: 1 Main St, Overdue Fine: $12.50"
        );
    }

    #[test]
    fn test_patron_serialization() {
        let patron = Patron::new(id("77"), "Alice", "Smith", "1 Main St", 12.5).unwrap();
        let json = serde_json::to_value(&patron).unwrap();
        assert_eq!(json["id"], "77");
        assert_eq!(json["first_name"], "Alice");
        assert_eq!(json["overdue_fine"], 12.5);
    }
}
