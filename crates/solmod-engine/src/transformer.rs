//! Line-by-line rewrite engine.
//!
//! Each line is classified independently, in priority order:
//!
//! 1. Pragma lines are replaced with the target directive when outdated.
//! 2. SafeMath imports are dropped when the file uses SafeMath.
//! 3. SafeMath calls are rewritten into infix operators when the file uses
//!    SafeMath.
//! 4. Everything else is kept verbatim.
//!
//! # Precedence
//!
//! Call rewriting is a literal token substitution and does not rebalance
//! operator precedence. `a.sub(b).mul(c)` computes `(a - b) * c`, but the
//! rewritten `a-(b)*(c)` computes `a - (b * c)`. Chains that mix operators of
//! different precedence must be reviewed by hand after a run.

use std::path::{Path, PathBuf};

use crate::options::{OperatorSpacing, TransformOptions};
use crate::patterns::{
    SafeMathOp, has_safe_math_call, is_outdated_pragma, is_pragma_line, is_safe_math_import,
};
use crate::summary::{ChangeKind, ChangeSummary};
use crate::usage::{SafeMathUsage, detect_safe_math_usage};

/// The decision taken for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Emit the line unchanged.
    Keep,
    /// Emit `text` instead of the line. `text` carries the original line
    /// terminator.
    Replace {
        /// Replacement line.
        text: String,
        /// The kind of change the replacement represents.
        change: ChangeKind,
    },
    /// Omit the line from the output.
    Drop {
        /// The kind of change the removal represents.
        change: ChangeKind,
    },
}

impl LineEdit {
    /// Returns the change this edit records, if any.
    #[must_use]
    pub const fn change(&self) -> Option<ChangeKind> {
        match self {
            Self::Keep => None,
            Self::Replace { change, .. } | Self::Drop { change } => Some(*change),
        }
    }
}

/// Classifies lines of one file.
///
/// The SafeMath usage flag is fixed at construction so every line of a file
/// is judged against the same whole-file evidence.
#[derive(Debug, Clone, Copy)]
pub struct LineTransformer<'a> {
    options: &'a TransformOptions,
    safe_math_in_use: bool,
}

impl<'a> LineTransformer<'a> {
    /// Creates a transformer for a file with the given SafeMath usage flag.
    #[must_use]
    pub const fn new(options: &'a TransformOptions, safe_math_in_use: bool) -> Self {
        Self {
            options,
            safe_math_in_use,
        }
    }

    /// Decides what to do with one line, terminator included.
    #[must_use]
    pub fn edit(&self, line: &str) -> LineEdit {
        if is_pragma_line(line) {
            return self.edit_pragma(line);
        }
        if !self.safe_math_in_use {
            return LineEdit::Keep;
        }
        if is_safe_math_import(line) {
            return LineEdit::Drop {
                change: ChangeKind::SafeMathRemoved,
            };
        }
        if has_safe_math_call(line) {
            return LineEdit::Replace {
                text: rewrite_calls(line, self.options.spacing()),
                change: ChangeKind::SafeMathRemoved,
            };
        }
        LineEdit::Keep
    }

    fn edit_pragma(&self, line: &str) -> LineEdit {
        if !is_outdated_pragma(line) {
            return LineEdit::Keep;
        }
        let (body, terminator) = split_terminator(line);
        let directive = self.options.target().pragma_directive();
        if body == directive {
            return LineEdit::Keep;
        }
        LineEdit::Replace {
            text: directive + terminator,
            change: ChangeKind::PragmaUpdated,
        }
    }
}

/// Applies every SafeMath substitution to the line, in declaration order.
fn rewrite_calls(line: &str, spacing: OperatorSpacing) -> String {
    SafeMathOp::ALL
        .iter()
        .fold(line.to_owned(), |text, op| {
            text.replace(op.method_token(), op.replacement(spacing))
        })
}

/// Splits a line into its body and its `\r\n`, `\n`, or empty terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Result of transforming one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
    path: PathBuf,
    output: String,
    summary: ChangeSummary,
    usage: SafeMathUsage,
}

impl FileRewrite {
    /// Path the content was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The transformed content. Equal to the input when nothing changed.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the rewrite, returning the transformed content.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// The changes applied to the file.
    #[must_use]
    pub const fn summary(&self) -> ChangeSummary {
        self.summary
    }

    /// The SafeMath evidence that gated call rewriting.
    #[must_use]
    pub const fn usage(&self) -> SafeMathUsage {
        self.usage
    }

    /// Whether the output differs from the input.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.summary.any_change()
    }
}

/// Transforms the content of one Solidity file.
///
/// SafeMath usage is detected once over the whole content, then each line is
/// classified by a [`LineTransformer`]. The function performs no I/O and never
/// fails; lines it cannot classify are kept as they are. Running it again on
/// its own output reports no changes.
#[must_use]
pub fn transform_file(path: &Path, content: &str, options: &TransformOptions) -> FileRewrite {
    let usage = detect_safe_math_usage(content);
    let transformer = LineTransformer::new(options, usage.is_in_use());

    let mut output = String::with_capacity(content.len());
    let mut summary = ChangeSummary::new();

    for line in content.split_inclusive('\n') {
        let edit = transformer.edit(line);
        if let Some(change) = edit.change() {
            summary.record(change);
        }
        match edit {
            LineEdit::Keep => output.push_str(line),
            LineEdit::Replace { text, .. } => output.push_str(&text),
            LineEdit::Drop { .. } => {}
        }
    }

    FileRewrite {
        path: path.to_path_buf(),
        output,
        summary,
        usage,
    }
}
