//! Flags shared by every clientcheck subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Show why records pass or fail (-v, -vv, -vvv)",
        long_help = "Explain validation on stderr:
    (none)  - Only failed records and config problems
    -v      - Outcome of every record and the file it came from
    -vv     - CPF policy in effect, failing field, record source crate
    -vvv    - Each checker as it runs, parsed birthdays, span timings"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing on success; failures still reach stderr"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Replaces the platform config file. A missing file here is an error.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings such as validation.strict_cpf from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to report verdicts on stdout"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Level applied to the clientcheck crates when `RUST_LOG` is unset.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rendering of verdicts on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored confirmations and error reports.
    Human,
    Plain,
    /// One `{"valid", "field", "message"}` object per run.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_steps_through_levels() {
        let levels: Vec<_> = (0..=4).map(|v| args_with(v, false).log_level()).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_only_keeps_errors() {
        assert_eq!(args_with(0, true).log_level(), LevelFilter::ERROR);
        assert_eq!(args_with(3, true).log_level(), LevelFilter::ERROR);
    }
}
