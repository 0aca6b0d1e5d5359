//! Unified error handling for clientcheck core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ValidationError;

/// Root error type for clientcheck core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// A field check failed. Displays the checker's message unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Errors from the application layer (loading records).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in clientcheck".into(),
                "Please report this issue at: https://github.com/cosecruz/clientcheck/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The failed field check, if this is a validation failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Input,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientField;

    #[test]
    fn validation_error_is_transparent() {
        let err: CoreError = ValidationError::new(ClientField::Email, "bad email").into();
        assert_eq!(err.to_string(), "bad email");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.as_validation().is_some());
    }

    #[test]
    fn application_error_keeps_category() {
        let err: CoreError = ApplicationError::RecordNotFound {
            location: "client.json".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.as_validation().is_none());
    }
}
