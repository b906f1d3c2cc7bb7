//! Parameters that steer a transformation pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::EngineError;

/// Constraint written into rewritten pragmas when none is configured.
pub const DEFAULT_TARGET_VERSION: &str = "^0.8.0";

/// A validated compiler version constraint such as `^0.8.0`.
///
/// The constraint is inserted verbatim between `pragma solidity` and the
/// closing semicolon, so it must be non-empty and may not contain a
/// semicolon or a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion(String);

impl TargetVersion {
    /// Validates a constraint, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTarget`] when the constraint is blank or
    /// contains a semicolon or line break.
    pub fn parse(constraint: &str) -> Result<Self, EngineError> {
        let trimmed = constraint.trim();
        if trimmed.is_empty() {
            return Err(EngineError::invalid_target(constraint, "constraint is empty"));
        }
        if trimmed.contains(';') {
            return Err(EngineError::invalid_target(
                constraint,
                "constraint must not contain ';'",
            ));
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(EngineError::invalid_target(
                constraint,
                "constraint must fit on a single line",
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the constraint text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the full pragma directive without a line terminator.
    #[must_use]
    pub fn pragma_directive(&self) -> String {
        format!("pragma solidity {};", self.0)
    }
}

impl Default for TargetVersion {
    fn default() -> Self {
        Self(DEFAULT_TARGET_VERSION.to_owned())
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TargetVersion {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Layout of the infix operators that replace SafeMath calls.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OperatorSpacing {
    /// `a.add(b)` becomes `a+(b)`.
    #[default]
    Compact,
    /// `a.add(b)` becomes `a + (b)`.
    Spaced,
}

/// Options for a single [`transform_file`](crate::transform_file) call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    target: TargetVersion,
    spacing: OperatorSpacing,
}

impl TransformOptions {
    /// Creates options for the given target and operator spacing.
    #[must_use]
    pub const fn new(target: TargetVersion, spacing: OperatorSpacing) -> Self {
        Self { target, spacing }
    }

    /// Returns a copy of these options using a different operator spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: OperatorSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// The constraint written into rewritten pragmas.
    #[must_use]
    pub const fn target(&self) -> &TargetVersion {
        &self.target
    }

    /// The operator spacing applied to rewritten calls.
    #[must_use]
    pub const fn spacing(&self) -> OperatorSpacing {
        self.spacing
    }
}
