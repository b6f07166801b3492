//! Patron identifier type with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest identifier the registry issues
pub const MIN_PATRON_ID: u16 = 1;

/// Largest identifier the registry issues
pub const MAX_PATRON_ID: u16 = 9999;

/// Patron identifier newtype wrapper
///
/// A canonical decimal string of 1-4 digits with a value in 1-9999.
/// Leading zeros are rejected so that string equality matches numeric equality.
///
/// # Examples
///
/// ```
/// use patron_registry::domain::ids::PatronId;
/// use std::str::FromStr;
///
/// let id = PatronId::from_str("1042").unwrap();
/// assert_eq!(id.as_str(), "1042");
/// assert_eq!(id.value(), 1042);
/// assert!(PatronId::from_str("0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatronId(String);

impl PatronId {
    /// Creates a new PatronId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(PatronId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() || id.len() > 4 || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Patron ID must be 1-4 decimal digits, got: '{id}'"));
        }
        if id.starts_with('0') {
            return Err(format!(
                "Patron ID must be between {MIN_PATRON_ID} and {MAX_PATRON_ID} without leading zeros, got: '{id}'"
            ));
        }
        Ok(Self(id))
    }

    /// Creates a PatronId from its numeric value
    pub fn from_value(value: u16) -> Result<Self, String> {
        if !(MIN_PATRON_ID..=MAX_PATRON_ID).contains(&value) {
            return Err(format!(
                "Patron ID must be between {MIN_PATRON_ID} and {MAX_PATRON_ID}, got: {value}"
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the patron ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value of the identifier
    pub fn value(&self) -> u16 {
        // Validated on construction: at most 4 ASCII digits always fits
        self.0.parse().unwrap_or_default()
    }
}

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatronId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PatronId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatronId> for String {
    fn from(id: PatronId) -> Self {
        id.0
    }
}

impl AsRef<str> for PatronId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patron_id_creation() {
        let id = PatronId::new("42").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_patron_id_bounds() {
        assert!(PatronId::new("1").is_ok());
        assert!(PatronId::new("9999").is_ok());
        assert!(PatronId::new("0").is_err());
        assert!(PatronId::new("10000").is_err());
        assert!(PatronId::new("").is_err());
    }

    #[test]
    fn test_patron_id_rejects_non_digits_and_leading_zeros() {
        assert!(PatronId::new("12a").is_err());
        assert!(PatronId::new("-5").is_err());
        assert!(PatronId::new(" 5").is_err());
        assert!(PatronId::new("007").is_err());
    }

    #[test]
    fn test_patron_id_from_value() {
        assert_eq!(PatronId::from_value(7).unwrap().as_str(), "7");
        assert!(PatronId::from_value(0).is_err());
        assert!(PatronId::from_value(10_000).is_err());
    }

    #[test]
    fn test_patron_id_serialization() {
        let id = PatronId::new("1234").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1234\"");
        let deserialized: PatronId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
        assert!(serde_json::from_str::<PatronId>("\"0\"").is_err());
    }
}
