//! Validation Service - application orchestrator.
//!
//! Coordinates the validation workflow:
//! 1. Load the record through the [`RecordSource`] port (optional)
//! 2. Run the field validator
//! 3. Report the first failure, if any

use tracing::{info, instrument, warn};

use crate::{
    application::ports::RecordSource,
    domain::{ClientRecord, FieldValidator, ValidationPolicy},
    error::CoreResult,
};

/// Validates client records, either given directly or loaded from a source.
pub struct ValidationService {
    source: Box<dyn RecordSource>,
    validator: FieldValidator,
}

impl ValidationService {
    /// Create a new validation service with the given adapter and policy.
    pub fn new(source: Box<dyn RecordSource>, policy: ValidationPolicy) -> Self {
        Self {
            source,
            validator: FieldValidator::new(policy),
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.validator.policy()
    }

    /// Check a record already in memory.
    #[instrument(skip_all)]
    pub fn validate_record(&self, record: &ClientRecord) -> CoreResult<()> {
        match self.validator.validate(record) {
            Ok(()) => {
                info!("Client record is valid");
                Ok(())
            }
            Err(err) => {
                warn!(field = %err.field(), "Client record rejected: {err}");
                Err(err.into())
            }
        }
    }

    /// Load a record from the source and check it.
    ///
    /// Returns the record when every field passes.
    #[instrument(skip(self))]
    pub fn validate_from(&self, location: &str) -> CoreResult<ClientRecord> {
        let record = self.source.load(location)?;
        self.validate_record(&record)?;
        Ok(record)
    }
}
