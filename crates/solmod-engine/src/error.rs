//! Error types for the modernisation engine.
//!
//! Rewriting itself never fails: every recogniser miss degrades to leaving the
//! line untouched. The only fallible step is validating the target version
//! constraint before a run starts.

use thiserror::Error;

/// Errors raised while preparing a transformation.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    /// The configured target version constraint cannot be written into a
    /// pragma directive.
    #[error("invalid target version constraint '{constraint}': {reason}")]
    InvalidTarget {
        /// The rejected constraint text.
        constraint: String,
        /// Why the constraint was rejected.
        reason: &'static str,
    },
}

impl EngineError {
    /// Creates an invalid target error.
    #[must_use]
    pub fn invalid_target(constraint: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidTarget {
            constraint: constraint.into(),
            reason,
        }
    }
}
