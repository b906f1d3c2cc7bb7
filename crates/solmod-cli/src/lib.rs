//! Command-line runtime for the solmod toolchain.
//!
//! The module owns argument parsing, configuration bootstrapping, file
//! discovery, and reporting. Each discovered `.sol` file is processed to
//! completion (read, transform, optional write) before the next one starts.
//! The runtime can be driven from the binary entrypoint or from tests where
//! configuration loading and IO streams are substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;

mod cli;
mod config;
mod discovery;
mod driver;
mod errors;
mod report;
mod telemetry;

use cli::Cli;
use config::route_arguments;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use discovery::find_solidity_files;
use driver::{FileDriver, WriteMode};
pub(crate) use errors::AppError;
use report::{RunTotals, outcome_line};

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

struct CliRunner<'a, 'io, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'io, W, E>,
    loader: &'a L,
}

impl<'a, 'io, W, E, L> CliRunner<'a, 'io, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: &'a mut IoStreams<'io, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let routed = route_arguments(&args);

        let cli = match Cli::try_parse_from(&routed.command) {
            Ok(cli) => cli,
            Err(error) if is_informational(error.kind()) => {
                return match write!(self.io.stdout, "{error}") {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::FAILURE,
                };
            }
            Err(error) => return self.fail(&AppError::CliUsage(error)),
        };

        match self.execute(&cli, &routed.settings) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => self.fail(&error),
        }
    }

    fn execute(&mut self, cli: &Cli, config_arguments: &[OsString]) -> Result<(), AppError> {
        let config = self.loader.load(config_arguments)?;
        telemetry::initialise(&config)?;
        let options = config.transform_options()?;

        let mode = if cli.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        };
        let driver = FileDriver::new(&options, mode);
        let mut totals = RunTotals::default();

        for path in find_solidity_files(&cli.directory)? {
            let outcome = driver.process(&path)?;
            totals.record(outcome);
            writeln!(
                self.io.stdout,
                "{}",
                outcome_line(&path, &cli.directory, outcome, mode)
            )
            .map_err(AppError::WriteReport)?;
        }

        info!(
            updated = totals.updated,
            unchanged = totals.unchanged,
            dry_run = cli.dry_run,
            "run complete"
        );
        writeln!(self.io.stdout, "{totals}").map_err(AppError::WriteReport)?;
        self.io.stdout.flush().map_err(AppError::WriteReport)
    }

    fn fail(&mut self, error: &AppError) -> ExitCode {
        let _ = writeln!(self.io.stderr, "{error}");
        ExitCode::FAILURE
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

const fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[cfg(test)]
mod tests;
