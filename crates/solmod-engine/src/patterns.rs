//! Recognisers for the line shapes the engine rewrites.
//!
//! Every recogniser is a pure predicate over a single line. A miss is the
//! common case and never an error: lines that cannot be classified with
//! confidence are left alone by the transformer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::OperatorSpacing;

/// Literal prefix identifying a compiler version pragma.
const PRAGMA_PREFIX: &str = "pragma solidity";

/// Newest `0.N` release line still considered outdated.
const LATEST_OUTDATED_MAJOR: u32 = 7;

/// Optional comparator followed by a `0.N` version at the start of a
/// constraint. Longer comparators are listed first so `>=` is not read as `>`.
static OUTDATED_CONSTRAINT: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:\^|~|>=|<=|>|<|=)?\s*0\.(?P<major>\d+)(?:[.\s]|$)"));

/// An import statement anywhere on the line whose quoted path mentions
/// SafeMath: `import "…";`, `import {…} from "…";`, `import * as X from "…";`
/// and `import "…" as X;`.
static SAFE_MATH_IMPORT: Lazy<Regex> = Lazy::new(|| {
    compile(
        r#"\bimport\s+(?:(?:\{[^}]*\}|\*\s+as\s+\w+)\s*from\s+)?["'][^"']*SafeMath[^"']*["'](?:\s+as\s+\w+)?\s*;"#,
    )
});

#[expect(
    clippy::expect_used,
    reason = "recogniser patterns are literals exercised by the unit tests"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("recogniser pattern should compile")
}

/// The SafeMath library methods rewritten into infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeMathOp {
    /// `.add(` becomes `+`.
    Add,
    /// `.sub(` becomes `-`.
    Sub,
    /// `.mul(` becomes `*`.
    Mul,
    /// `.div(` becomes `/`.
    Div,
    /// `.mod(` becomes `%`.
    Mod,
}

impl SafeMathOp {
    /// All operations, in the order substitutions are applied.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod];

    /// The method-call token matched in source text.
    #[must_use]
    pub const fn method_token(self) -> &'static str {
        match self {
            Self::Add => ".add(",
            Self::Sub => ".sub(",
            Self::Mul => ".mul(",
            Self::Div => ".div(",
            Self::Mod => ".mod(",
        }
    }

    /// The text substituted for [`Self::method_token`].
    ///
    /// The opening parenthesis of the call is kept so the argument stays
    /// grouped.
    #[must_use]
    pub const fn replacement(self, spacing: OperatorSpacing) -> &'static str {
        match (self, spacing) {
            (Self::Add, OperatorSpacing::Compact) => "+(",
            (Self::Sub, OperatorSpacing::Compact) => "-(",
            (Self::Mul, OperatorSpacing::Compact) => "*(",
            (Self::Div, OperatorSpacing::Compact) => "/(",
            (Self::Mod, OperatorSpacing::Compact) => "%(",
            (Self::Add, OperatorSpacing::Spaced) => " + (",
            (Self::Sub, OperatorSpacing::Spaced) => " - (",
            (Self::Mul, OperatorSpacing::Spaced) => " * (",
            (Self::Div, OperatorSpacing::Spaced) => " / (",
            (Self::Mod, OperatorSpacing::Spaced) => " % (",
        }
    }
}

/// Returns true when the line declares a compiler version pragma.
#[must_use]
pub fn is_pragma_line(line: &str) -> bool {
    line.trim_start().starts_with(PRAGMA_PREFIX)
}

/// Extracts the version constraint from a pragma line.
///
/// The constraint is the text between `pragma solidity` and the first
/// semicolon, trimmed. Returns `None` for lines that are not pragmas.
#[must_use]
pub fn pragma_constraint(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(PRAGMA_PREFIX)?;
    rest.split(';').next().map(str::trim)
}

/// Returns true when the pragma targets a release line older than `0.8`.
///
/// Only the leading version of the constraint is inspected, so
/// `>=0.4.21 <0.6.0` is outdated and `>=0.8.0 <0.9.0` is current. Constraints
/// that do not start with a recognised comparator and a `0.N` version are
/// never reported as outdated.
#[must_use]
pub fn is_outdated_pragma(line: &str) -> bool {
    pragma_constraint(line)
        .and_then(|constraint| OUTDATED_CONSTRAINT.captures(constraint))
        .and_then(|captures| captures.name("major"))
        .and_then(|major| major.as_str().parse::<u32>().ok())
        .is_some_and(|major| major <= LATEST_OUTDATED_MAJOR)
}

/// Returns true when the line imports a module whose path mentions SafeMath.
#[must_use]
pub fn is_safe_math_import(line: &str) -> bool {
    SAFE_MATH_IMPORT.is_match(line)
}

/// Returns true when the line contains any SafeMath method-call token.
#[must_use]
pub fn has_safe_math_call(line: &str) -> bool {
    SafeMathOp::ALL
        .iter()
        .any(|op| line.contains(op.method_token()))
}
