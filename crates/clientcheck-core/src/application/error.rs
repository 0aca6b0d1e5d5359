//! Application layer errors.
//!
//! These errors represent failures in getting a record to the validator, not
//! failed field checks. Field failures are `ValidationError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading a client record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No record exists at the given location.
    #[error("No client record found at {location}")]
    RecordNotFound { location: String },

    /// The source cannot read this kind of record.
    #[error("Unsupported record format '{format}' for {location}")]
    UnsupportedFormat { location: String, format: String },

    /// The record exists but could not be parsed.
    #[error("Malformed client record at {location}: {reason}")]
    Malformed { location: String, reason: String },

    /// The source failed for another reason (I/O, lock poisoned, etc.).
    #[error("Record source failed at {location}: {reason}")]
    SourceFailed { location: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RecordNotFound { location } => vec![
                format!("Check that '{}' exists", location),
                "Or pass the fields directly with --name, --birthday, --email and --cpf".into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Supported record formats:".into(),
                "  • .json".into(),
                "  • .toml".into(),
            ],
            Self::Malformed { .. } => vec![
                "A record needs the string fields: name, birthday, email, cpf".into(),
                r#"Example: {"name": "Maria da Silva", "birthday": "15-06-1990", "email": "maria@example.com", "cpf": "123.456.789-00"}"#.into(),
            ],
            Self::SourceFailed { location, .. } => vec![
                format!("Failed to read: {}", location),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RecordNotFound { .. } => ErrorCategory::NotFound,
            Self::UnsupportedFormat { .. } | Self::Malformed { .. } => ErrorCategory::Input,
            Self::SourceFailed { .. } => ErrorCategory::Internal,
        }
    }
}
