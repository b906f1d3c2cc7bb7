//! CLI argument definitions for the solmod tool.
//!
//! Configuration flags such as `--target-version` are split off before this
//! parser runs and handled by `ortho_config`; see [`crate::config::CONFIG_CLI_FLAGS`].

use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the solmod tool.
#[derive(Parser, Debug)]
#[command(
    name = "solmod",
    version,
    about = "Update Solidity pragmas and replace SafeMath calls with native operators"
)]
pub(crate) struct Cli {
    /// Directory searched recursively for `.sol` files.
    #[arg(value_name = "DIRECTORY")]
    pub(crate) directory: PathBuf,
    /// Reports the files that would change without writing them.
    #[arg(long)]
    pub(crate) dry_run: bool,
}
