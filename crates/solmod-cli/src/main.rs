//! CLI entrypoint for the solmod Solidity modernisation tool.
//!
//! The binary delegates to [`solmod_cli::run`], which loads configuration,
//! walks the requested directory, and rewrites outdated Solidity files.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    solmod_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
