//! Routing of `solmod` arguments between `ortho_config` and clap.
//!
//! Settings flags (`--target-version` and friends) lead the command line and
//! are read by the configuration loader; the directory and `--dry-run` that
//! follow belong to the command parser.

use std::ffi::{OsStr, OsString};

use solmod_config::Config;

use crate::AppError;

/// Settings flags handed to the configuration loader.
///
/// MAINTENANCE: keep in sync with the fields of `solmod_config::Config`.
pub(crate) const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--target-version",
    "--operator-spacing",
    "--log-filter",
    "--log-format",
];

pub(crate) trait ConfigLoader {
    /// Loads settings from the leading settings flags of a run.
    ///
    /// `args` starts with the program name. Settings flags placed after the
    /// directory are not routed here and clap rejects them.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_args(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

/// Arguments of one run, split between the two parsers. Both halves keep the
/// program name in first position.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RoutedArguments {
    pub(crate) settings: Vec<OsString>,
    pub(crate) command: Vec<OsString>,
}

/// Peels the leading settings flags (with their values) off `args`.
pub(crate) fn route_arguments(args: &[OsString]) -> RoutedArguments {
    let Some((program, mut rest)) = args.split_first() else {
        return RoutedArguments {
            settings: Vec::new(),
            command: Vec::new(),
        };
    };

    let mut settings = vec![program.clone()];
    while let Some((flag, after)) = rest.split_first() {
        let Some(separate_value) = settings_flag(flag) else {
            break;
        };
        settings.push(flag.clone());
        rest = after;
        if separate_value && let Some((value, after_value)) = rest.split_first() {
            settings.push(value.clone());
            rest = after_value;
        }
    }

    let command = std::iter::once(program).chain(rest).cloned().collect();
    RoutedArguments { settings, command }
}

/// `Some(true)` for `--flag value`, `Some(false)` for `--flag=value`, `None`
/// for anything that is not a settings flag.
fn settings_flag(argument: &OsStr) -> Option<bool> {
    let text = argument.to_str()?;
    let (flag, separate_value) = text
        .split_once('=')
        .map_or((text, true), |(flag, _)| (flag, false));
    CONFIG_CLI_FLAGS.contains(&flag).then_some(separate_value)
}
