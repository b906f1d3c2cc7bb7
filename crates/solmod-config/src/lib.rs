//! Shared configuration for the solmod toolchain.
//!
//! Settings are layered by `ortho_config`: built-in defaults first, then a
//! configuration file (selected with `--config-path`), then `SOLMOD_*`
//! environment variables, and finally command-line flags. Later layers win.
//!
//! | Setting            | Flag                 | Environment               | Default  |
//! |--------------------|----------------------|---------------------------|----------|
//! | `target_version`   | `--target-version`   | `SOLMOD_TARGET_VERSION`   | `^0.8.0` |
//! | `operator_spacing` | `--operator-spacing` | `SOLMOD_OPERATOR_SPACING` | `compact`|
//! | `log_filter`       | `--log-filter`       | `SOLMOD_LOG_FILTER`       | `info`   |
//! | `log_format`       | `--log-format`       | `SOLMOD_LOG_FORMAT`       | `compact`|

mod defaults;
mod logging;

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use solmod_engine::{EngineError, OperatorSpacing, TargetVersion, TransformOptions};

pub use defaults::{
    DEFAULT_LOG_FILTER, default_log_filter_string, default_log_format, default_operator_spacing,
    default_target_version_string,
};
pub use logging::LogFormat;

/// Resolved configuration for a solmod run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SOLMOD")]
pub struct Config {
    /// Version constraint written into rewritten pragmas.
    #[serde(default = "default_target_version_string")]
    pub target_version: String,
    /// Layout of the operators replacing SafeMath calls.
    #[serde(default = "default_operator_spacing")]
    pub operator_spacing: OperatorSpacing,
    /// `tracing` filter expression.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_version: default_target_version_string(),
            operator_spacing: default_operator_spacing(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Loads configuration from defaults, file, environment, and `args`.
    ///
    /// The first element of `args` is treated as the program name.
    ///
    /// # Errors
    ///
    /// Returns the `ortho_config` error when a layer cannot be read or
    /// merged.
    pub fn load_from_args<I>(args: I) -> Result<Self, Arc<OrthoError>>
    where
        I: IntoIterator<Item = OsString>,
    {
        <Self as OrthoConfig>::load_from_iter(args)
    }

    /// The configured `tracing` filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// The configured log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Builds validated engine options from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTarget`] when `target_version` cannot be
    /// used as a pragma constraint.
    pub fn transform_options(&self) -> Result<TransformOptions, ConfigError> {
        let target = TargetVersion::parse(&self.target_version)?;
        Ok(TransformOptions::new(target, self.operator_spacing))
    }
}

/// Errors raised while validating loaded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured target version was rejected by the engine.
    #[error("target_version: {0}")]
    InvalidTarget(#[from] EngineError),
}
