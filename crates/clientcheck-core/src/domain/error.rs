// ============================================================================
// domain/error.rs - VALIDATION FAILURE
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ClientField;

/// A single failed field check.
///
/// The display form is exactly the user-facing message, so callers can show
/// `err.to_string()` to an end user without further formatting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    field: ClientField,
    message: String,
}

impl ValidationError {
    pub fn new(field: ClientField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The field whose checker failed.
    pub fn field(&self) -> ClientField {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.field {
            ClientField::Name => vec![
                "Use letters only, separating words with spaces".into(),
                "Hyphens, apostrophes and a trailing period are allowed".into(),
                "Example: Maria da Silva, Anne-Marie O'Neil".into(),
            ],
            ClientField::Birthday => vec![
                "Use day-month-year separated by hyphens".into(),
                "Example: 15-06-1990".into(),
            ],
            ClientField::Email => vec!["Example: maria@example.com".into()],
            ClientField::Cpf => vec![
                "Use three groups of three digits and two check digits".into(),
                "Example: 123.456.789-00".into(),
            ],
        }
    }
}
