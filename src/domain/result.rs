//! Result type alias for registry operations

use super::errors::RegistryError;

/// Result type alias for registry operations
///
/// # Examples
///
/// ```
/// use patron_registry::domain::result::Result;
/// use patron_registry::domain::errors::RegistryError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RegistryError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(RegistryError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
