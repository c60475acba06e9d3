//! Error type for classifier operations.
//!
//! The `Display` text of the validation variants is the exact message
//! returned to HTTP clients.

/// Error type for classifier operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Field 'hba1c' is required.")]
    MissingField,

    #[error("'hba1c' must be a number.")]
    InvalidType,

    #[error("{0}")]
    Internal(String),
}

impl ClassifierError {
    /// Whether the error was caused by the caller's input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField | Self::InvalidType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_exact() {
        assert_eq!(
            ClassifierError::MissingField.to_string(),
            "Field 'hba1c' is required."
        );
        assert_eq!(
            ClassifierError::InvalidType.to_string(),
            "'hba1c' must be a number."
        );
    }

    #[test]
    fn internal_echoes_message() {
        let err = ClassifierError::Internal("boom".to_owned());
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_validation());
        assert!(ClassifierError::MissingField.is_validation());
        assert!(ClassifierError::InvalidType.is_validation());
    }
}
