use tracing::{debug, instrument};

use crate::domain::{
    entities::ClientRecord,
    error::ValidationError,
    rules::{self, Checker},
    value_objects::{ClientField, ValidationPolicy},
};

/// Run `(checker, value)` pairs in order, stopping at the first failure.
pub fn validate_properties(checks: &[(Checker, &str)]) -> Result<(), ValidationError> {
    checks.iter().try_for_each(|(check, value)| check(value))
}

/// Validate a record with the default policy.
pub fn validate_all(record: &ClientRecord) -> Result<(), ValidationError> {
    FieldValidator::default().validate(record)
}

/// Run the checker for a single field with the default policy.
pub fn validate_field(field: ClientField, value: &str) -> Result<(), ValidationError> {
    FieldValidator::default().validate_field(field, value)
}

/// Ordered field checkers for client records.
///
/// Holds no mutable state; build one wherever it is needed.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    policy: ValidationPolicy,
    checks: [(ClientField, Checker); 4],
}

impl FieldValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        let cpf: Checker = if policy.verify_cpf_check_digits {
            rules::validate_cpf_strict
        } else {
            rules::validate_cpf
        };

        Self {
            policy,
            checks: [
                (ClientField::Name, rules::validate_name),
                (ClientField::Birthday, rules::validate_birthday),
                (ClientField::Email, rules::validate_email),
                (ClientField::Cpf, cpf),
            ],
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// The checkers in the order they run.
    pub fn checks(&self) -> &[(ClientField, Checker)] {
        &self.checks
    }

    /// Check every field of `record`, returning the first failure.
    #[instrument(skip_all, fields(strict_cpf = self.policy.verify_cpf_check_digits))]
    pub fn validate(&self, record: &ClientRecord) -> Result<(), ValidationError> {
        let values = record.values();
        let pairs: Vec<(Checker, &str)> = self
            .checks
            .iter()
            .zip(values)
            .map(|((_, check), value)| (*check, value))
            .collect();

        validate_properties(&pairs).inspect_err(|err| {
            debug!(field = %err.field(), "client record rejected");
        })
    }

    pub fn validate_field(&self, field: ClientField, value: &str) -> Result<(), ValidationError> {
        self.checks
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(Ok(()), |(_, check)| check(value))
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}
