use crate::error::ThemeError;

/// Core validation trait that all validators must implement.
///
/// This trait provides a consistent interface for validating data across
/// the crate. Validators are small unit structs so they can be embedded in
/// the types that use them.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use themekit::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Validation errors for storage keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKeyError {
    InvalidKey { key: String, reason: String },
}

impl StorageKeyError {
    pub fn user_message(&self) -> String {
        match self {
            StorageKeyError::InvalidKey { key, reason } => {
                format!(
                    "Invalid storage key: '{key}'\n\n\
                    Reason: {reason}\n\n\
                    Please use keys made of letters, digits, dots, hyphens and underscores."
                )
            }
        }
    }
}

impl From<StorageKeyError> for ThemeError {
    fn from(error: StorageKeyError) -> Self {
        ThemeError::Validation(error.user_message())
    }
}

/// Validator for keys handed to storage adapters.
///
/// Keys double as file names for [`crate::storage::FileStorage`], so path
/// separators and leading dots are rejected.
pub struct StorageKeyValidator;

impl Validator<str> for StorageKeyValidator {
    type Error = StorageKeyError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| StorageKeyError::InvalidKey {
            key: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Key cannot be empty"));
        }

        if input.len() > 128 {
            return Err(invalid("Key too long (max 128 characters)"));
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(invalid(
                "Key contains invalid characters (only letters, digits, '.', '-' and '_' allowed)",
            ));
        }

        if input.starts_with('.') {
            return Err(invalid("Key cannot start with a dot"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_validator() {
        let validator = StorageKeyValidator;

        // Valid keys
        assert!(validator.validate("theme-store").is_ok());
        assert!(validator.validate("app.theme_v2").is_ok());

        // Invalid keys
        assert!(validator.validate("").is_err());
        assert!(validator.validate("../escape").is_err());
        assert!(validator.validate("dir/key").is_err());
        assert!(validator.validate(".hidden").is_err());
        assert!(validator.validate(&"k".repeat(129)).is_err());
    }

    #[test]
    fn test_error_converts_to_validation() {
        let err = StorageKeyValidator.validate("a b").unwrap_err();
        let theme_err: ThemeError = err.into();
        assert!(theme_err.to_string().contains("Invalid storage key: 'a b'"));
    }
}
