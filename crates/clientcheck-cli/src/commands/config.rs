//! `clientcheck config`: show the settings a validation run would use.

use serde::Serialize;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dotted keys accepted by `config get`, with what they control.
const KEYS: [(&str, &str); 3] = [
    ("validation.strict_cpf", "verify CPF check digits on every run"),
    ("output.no_color", "disable colored output"),
    ("output.format", "auto, human, plain or json"),
];

#[derive(Serialize)]
struct Setting<'a> {
    key: &'a str,
    value: toml::Value,
}

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let json = output.format() == OutputFormat::Json;

    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            if json {
                output.json(&Setting { key: &key, value })?;
            } else {
                output.print(&format!("{key} = {}", render(&value)))?;
            }
        }

        ConfigCommands::List => {
            if json {
                output.json(&config)?;
            } else {
                output.header("Effective configuration:")?;
                output.print(&to_toml(&config)?)?;
                output.print(&format!("CPF checks: {}", describe_cpf_policy(&config)))?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

/// Resolve a dotted key against the serialised configuration.
fn lookup(config: &AppConfig, key: &str) -> CliResult<toml::Value> {
    let unknown = || CliError::ConfigError {
        message: format!(
            "Unknown config key '{key}'. Known keys: {}",
            KEYS.map(|(name, _)| name).join(", ")
        ),
        source: None,
    };

    if !KEYS.iter().any(|(name, _)| *name == key) {
        return Err(unknown());
    }

    let mut value = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    for part in key.split('.') {
        value = value.get(part).cloned().ok_or_else(unknown)?;
    }
    Ok(value)
}

fn render(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn describe_cpf_policy(config: &AppConfig) -> &'static str {
    if config.policy_with(false).verify_cpf_check_digits {
        "format and check digits"
    } else {
        "format only (pass --strict-cpf to verify check digits)"
    }
}
