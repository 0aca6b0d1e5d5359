//! CLI errors, their exit codes and how they are reported on stderr.
//!
//! A failed field check is the common case: the report names the field and
//! repeats the rule message unchanged. Everything else gets a generic
//! "Error:" report with suggestions.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use clientcheck_core::{
    domain::{ClientField, ValidationError},
    error::{CoreError, ErrorCategory as CoreCategory},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments clap accepted but that still do not form a record.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed checks and record loading errors. Displays the core message.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit status classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A field failed its check, or the input could not be read as a record.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    /// The failed check, when this error is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Core(core) => core.as_validation(),
            _ => None,
        }
    }

    pub fn failed_field(&self) -> Option<ClientField> {
        self.validation().map(ValidationError::field)
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => {
                vec!["Pass --file, or all of --name, --birthday, --email and --cpf".into()]
            }
            Self::ConfigError { .. } => vec![
                format!(
                    "Default config file: {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Run 'clientcheck config list' to see the settings in effect".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io(_) | Self::Serialization(_) => Vec::new(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Input => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// 2 for a rejected record or bad input, 3 when the record file is
    /// missing, 4 for configuration problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        let heading = match self.failed_field() {
            Some(field) => format!("{} {}", "✗".red().bold(), format!("Invalid {field}:").red().bold()),
            None => format!("{} {}", "✗".red().bold(), "Error:".red().bold()),
        };
        let mut out = format!("\n{heading}\n  {}\n", self.to_string().red());

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("  {} {}\n", "→".dimmed(), cause.dimmed()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for s in suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }
        out
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = match self.failed_field() {
            Some(field) => format!("\nInvalid {field}: {self}\n"),
            None => format!("\nError: {self}\n"),
        };

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("  Caused by: {cause}\n"));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }
        out
    }

    /// Messages of the underlying errors, outermost first.
    fn causes(&self) -> Vec<String> {
        std::iter::successors(self.source(), |err| (*err).source())
            .map(ToString::to_string)
            .collect()
    }

    pub fn log(&self) {
        match (self.failed_field(), self.category()) {
            (Some(field), _) => tracing::warn!(%field, "Record rejected: {self}"),
            (None, ErrorCategory::UserError | ErrorCategory::NotFound) => {
                tracing::warn!("{self}")
            }
            (None, _) => tracing::error!("{self}"),
        }
    }
}
