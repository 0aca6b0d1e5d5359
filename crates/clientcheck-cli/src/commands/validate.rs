//! `clientcheck validate`: check a full client record.

use tracing::{debug, instrument};

use clientcheck_adapters::FileRecordSource;
use clientcheck_core::{
    application::ValidationService,
    domain::ClientRecord,
    error::CoreError,
};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    commands::Verdict,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    mut args: ValidateArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let policy = config.policy_with(args.strict_cpf);
    debug!(?policy, "Validation policy resolved");

    let service = ValidationService::new(Box::new(FileRecordSource::new()), policy);

    let result = match args.file.take() {
        Some(path) => service.validate_from(&path.to_string_lossy()).map(|_| ()),
        None => service.validate_record(&record_from_flags(args)?),
    };

    report(result, &output)
}

/// Build the record from `--name`, `--birthday`, `--email` and `--cpf`.
fn record_from_flags(args: ValidateArgs) -> CliResult<ClientRecord> {
    match (args.name, args.birthday, args.email, args.cpf) {
        (Some(name), Some(birthday), Some(email), Some(cpf)) => {
            Ok(ClientRecord::new(name, birthday, email, cpf))
        }
        _ => Err(CliError::InvalidInput {
            message: "provide --file or all of --name, --birthday, --email and --cpf".into(),
            source: None,
        }),
    }
}

/// Print the outcome.  Validation failures still become a `CliError` so the
/// process exits non-zero.
fn report(result: Result<(), CoreError>, output: &OutputManager) -> CliResult<()> {
    let outcome = match result {
        Ok(()) => Ok(()),
        Err(CoreError::Validation(err)) => Err(err),
        Err(other) => return Err(other.into()),
    };

    if output.format() == OutputFormat::Json {
        output.json(&Verdict::from_result(&outcome))?;
    } else if outcome.is_ok() {
        output.success("Client record is valid")?;
    }

    outcome.map_err(|err| CliError::from(CoreError::from(err)))
}
