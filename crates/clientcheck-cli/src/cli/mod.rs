//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation rules live here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use clientcheck_core::domain::ClientField;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "clientcheck",
    bin_name = "clientcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2714} Client record validation",
    long_about = "clientcheck validates a client's name, birthday, email and CPF, \
                  reporting the first field that is invalid.",
    after_help = "EXAMPLES:\n\
        \x20 clientcheck validate --name \"Maria da Silva\" --birthday 15-06-1990 \\\n\
        \x20     --email maria@example.com --cpf 123.456.789-00\n\
        \x20 clientcheck validate --file client.json --strict-cpf\n\
        \x20 clientcheck check cpf 529.982.247-25\n\
        \x20 clientcheck completions bash > /usr/share/bash-completion/completions/clientcheck",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a full client record.
    #[command(
        visible_alias = "v",
        about = "Validate a client record",
        after_help = "EXAMPLES:\n\
            \x20 clientcheck validate --name \"Jo Silva\" --birthday 01-01-2000 --email jo@ex.com --cpf 000.000.000-00\n\
            \x20 clientcheck validate --file client.toml"
    )]
    Validate(ValidateArgs),

    /// Check a single field value.
    #[command(
        about = "Check one field",
        after_help = "EXAMPLES:\n\
            \x20 clientcheck check email user@ex.com\n\
            \x20 clientcheck check birthday 31-02-2020"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 clientcheck completions bash > ~/.local/share/bash-completion/completions/clientcheck\n\
            \x20 clientcheck completions zsh  > ~/.zfunc/_clientcheck"
    )]
    Completions(CompletionsArgs),

    /// Inspect the clientcheck configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 clientcheck config get validation.strict_cpf\n\
            \x20 clientcheck config list"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `clientcheck validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Read the record from a `.json` or `.toml` file.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        conflicts_with_all = ["name", "birthday", "email", "cpf"],
        help = "Record file (.json or .toml)"
    )]
    pub file: Option<PathBuf>,

    /// Full name.
    #[arg(long = "name", required_unless_present = "file", help = "Client name")]
    pub name: Option<String>,

    /// Birthday as DD-MM-YYYY.
    #[arg(
        long = "birthday",
        value_name = "DD-MM-YYYY",
        required_unless_present = "file",
        help = "Birthday (DD-MM-YYYY)"
    )]
    pub birthday: Option<String>,

    /// Email address.
    #[arg(long = "email", required_unless_present = "file", help = "Email address")]
    pub email: Option<String>,

    /// CPF as 000.000.000-00.
    #[arg(
        long = "cpf",
        value_name = "000.000.000-00",
        required_unless_present = "file",
        help = "CPF (000.000.000-00)"
    )]
    pub cpf: Option<String>,

    /// Also verify the CPF check digits.
    #[arg(long = "strict-cpf", help = "Verify CPF check digits")]
    pub strict_cpf: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `clientcheck check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Field to check.
    #[arg(value_enum, help = "Field to check")]
    pub field: FieldArg,

    /// Value to check.
    #[arg(value_name = "VALUE", allow_hyphen_values = true, help = "Value to check")]
    pub value: String,

    /// Also verify the CPF check digits.
    #[arg(long = "strict-cpf", help = "Verify CPF check digits")]
    pub strict_cpf: bool,
}

/// Client record fields accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FieldArg {
    Name,
    #[value(alias = "dob")]
    Birthday,
    #[value(alias = "e-mail")]
    Email,
    Cpf,
}

impl From<FieldArg> for ClientField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => ClientField::Name,
            FieldArg::Birthday => ClientField::Birthday,
            FieldArg::Email => ClientField::Email,
            FieldArg::Cpf => ClientField::Cpf,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `clientcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `clientcheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `validation.strict_cpf`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_validate_with_fields() {
        let cli = Cli::parse_from([
            "clientcheck",
            "validate",
            "--name",
            "Jo",
            "--birthday",
            "15-06-1990",
            "--email",
            "user@ex.com",
            "--cpf",
            "123.456.789-00",
        ]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert_eq!(args.name.as_deref(), Some("Jo"));
        assert!(args.file.is_none());
        assert!(!args.strict_cpf);
    }

    #[test]
    fn validate_requires_all_fields_without_file() {
        let result = Cli::try_parse_from(["clientcheck", "validate", "--name", "Jo"]);
        assert!(result.is_err());
    }

    #[test]
    fn validate_file_conflicts_with_fields() {
        let result = Cli::try_parse_from([
            "clientcheck",
            "validate",
            "--file",
            "client.json",
            "--name",
            "Jo",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn check_accepts_field_aliases() {
        let cli = Cli::parse_from(["clientcheck", "check", "dob", "15-06-1990"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(ClientField::from(args.field), ClientField::Birthday);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["clientcheck", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
