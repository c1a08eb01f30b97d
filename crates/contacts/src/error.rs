//! Error types for the contact layers.

use fixture_generator::FixtureError;

/// Type alias for all contact operations that could fail with a [`ContactError`].
pub type Result<T> = std::result::Result<T, ContactError>;

/// A contact failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by contact repositories and services.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// No contact is stored under the id
    #[error("NoSuchModel: no contact with id {0}")]
    NoSuchModel(u64),

    #[error("Invalid contact: {0}")]
    Validation(#[from] ValidationError),

    /// Generating a fixture contact failed
    #[error("Failed to generate contact: {0}")]
    Fixture(#[from] FixtureError),
}

impl ContactError {
    /// Whether this error means the requested contact does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContactError::NoSuchModel(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_model_message() {
        let err = ContactError::NoSuchModel(999);
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("NoSuchModel"));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new("First name must not be empty");
        assert_eq!(err.message(), "First name must not be empty");

        let err = ContactError::from(err);
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid contact: First name must not be empty"
        );
    }
}
