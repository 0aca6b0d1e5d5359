//! Diagnostics on stderr.
//!
//! Verdicts go to stdout through [`crate::output::OutputManager`]; tracing
//! output never does, so `--output-format json` stays parseable. Only the
//! three clientcheck crates are shown unless `RUST_LOG` says otherwise.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown at the `-v` level.
const LOG_TARGETS: [&str; 3] = ["clientcheck", "clientcheck_core", "clientcheck_adapters"];

/// Install the global subscriber. Call once, before any command runs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(args.log_level())?,
    };

    // At -vv the target tells loading failures (adapters) from rule failures
    // (core); at -vvv span close events time each validation.
    let detailed = args.log_level() >= LevelFilter::DEBUG;
    let span_events = if args.log_level() == LevelFilter::TRACE {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let use_ansi = !args.no_color
        && args.output_format != OutputFormat::Json
        && std::io::stderr().is_terminal();

    let fmt_layer = fmt::layer()
        .with_target(detailed)
        .with_span_events(span_events)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `level` for the clientcheck crates, everything else off.
fn default_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    LOG_TARGETS
        .iter()
        .try_fold(EnvFilter::new("off"), |filter, target| {
            let directive: Directive = format!("{target}={level}").parse()?;
            Ok(filter.add_directive(directive))
        })
}
