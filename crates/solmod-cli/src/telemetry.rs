//! Diagnostic logging for a `solmod` run.
//!
//! The per-file report is written to stdout by the runner; diagnostics go to
//! stderr only, so a redirected report stays clean. A run is short and its
//! lines are read in order, so events carry no timestamp.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;

use solmod_config::{Config, LogFormat};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors raised while installing diagnostic logging.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TelemetryError {
    /// `log_filter` is not a valid `tracing` directive list.
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },
    /// Another global subscriber was installed outside this module.
    #[error("failed to install diagnostics: {0}")]
    Install(#[source] SetGlobalDefaultError),
}

/// Installs stderr diagnostics for the first run in this process.
///
/// Later runs in the same process keep the first installation.
pub(crate) fn initialise(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED
        .get_or_try_init(|| install(config.log_filter(), config.log_format()))
        .map(|_| ())
}

fn install(filter: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let subscriber = stderr_subscriber(parse_filter(filter)?, format);
    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Install)
}

fn parse_filter(filter: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(filter).map_err(|source| TelemetryError::Filter {
        filter: filter.to_owned(),
        source,
    })
}

fn stderr_subscriber(filter: EnvFilter, format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false);
    match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(
            builder
                .compact()
                .with_ansi(io::stderr().is_terminal())
                .finish(),
        ),
    }
}
