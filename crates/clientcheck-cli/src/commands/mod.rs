//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod validate;

use serde::Serialize;

use clientcheck_core::domain::ValidationError;

/// Machine-readable outcome of a check, printed in JSON output mode.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Verdict<'a> {
    pub valid: bool,
    pub field: Option<&'a str>,
    pub message: Option<&'a str>,
}

impl<'a> Verdict<'a> {
    pub fn from_result(result: &'a Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                field: None,
                message: None,
            },
            Err(err) => Self {
                valid: false,
                field: Some(err.field().as_str()),
                message: Some(err.message()),
            },
        }
    }
}
