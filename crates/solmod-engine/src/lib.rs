//! Line-oriented modernisation engine for Solidity sources.
//!
//! This crate rewrites two legacy patterns found in older contracts:
//!
//! - **Outdated pragmas**: `pragma solidity` declarations pinned to a release
//!   line before `0.8` are replaced with a configured [`TargetVersion`].
//! - **SafeMath arithmetic**: `.add(`, `.sub(`, `.mul(`, `.div(`, and `.mod(`
//!   method calls are rewritten into native infix operators, and the SafeMath
//!   import is dropped, but only when the file demonstrably uses SafeMath.
//!
//! The engine is deliberately textual. It classifies each line with a small
//! set of recognisers and never builds a syntax tree, so the output is not
//! validated and operator precedence is not rebalanced (see
//! [`transform_file`]).
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use solmod_engine::{TransformOptions, transform_file};
//!
//! let source = "pragma solidity ^0.4.21;\nimport \"./SafeMath.sol\";\n";
//! let rewrite = transform_file(Path::new("Token.sol"), source, &TransformOptions::default());
//!
//! assert!(rewrite.summary().pragma_updated());
//! assert_eq!(rewrite.output(), "pragma solidity ^0.8.0;\n");
//! ```

mod error;
mod options;
mod patterns;
mod summary;
mod transformer;
mod usage;

pub use error::EngineError;
pub use options::{DEFAULT_TARGET_VERSION, OperatorSpacing, TargetVersion, TransformOptions};
pub use patterns::{
    SafeMathOp, has_safe_math_call, is_outdated_pragma, is_pragma_line, is_safe_math_import,
    pragma_constraint,
};
pub use summary::{ChangeKind, ChangeSummary};
pub use transformer::{FileRewrite, LineEdit, LineTransformer, transform_file};
pub use usage::{SafeMathUsage, detect_safe_math_usage};

#[cfg(test)]
mod tests;
