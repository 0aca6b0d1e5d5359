//! `clientcheck check`: run one field's checker.

use tracing::info;

use clientcheck_core::{
    domain::{ClientField, FieldValidator},
    error::CoreError,
};

use crate::{
    cli::{CheckArgs, OutputFormat},
    commands::Verdict,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let field = ClientField::from(args.field);
    let validator = FieldValidator::new(config.policy_with(args.strict_cpf));

    let result = validator.validate_field(field, &args.value);

    if output.format() == OutputFormat::Json {
        output.json(&Verdict::from_result(&result))?;
    } else if result.is_ok() {
        output.success(&format!("{field} is valid"))?;
    }

    if result.is_ok() {
        info!(%field, "Field is valid");
    }

    result.map_err(|err| CliError::from(CoreError::from(err)))
}
