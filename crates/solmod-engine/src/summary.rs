//! Per-file record of which rewrites took place.

use std::fmt;

/// A kind of rewrite applied to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// An outdated pragma was replaced with the target constraint.
    PragmaUpdated,
    /// A SafeMath import was dropped or SafeMath calls were rewritten.
    SafeMathRemoved,
}

impl ChangeKind {
    /// Human-readable description used in reports and commit messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PragmaUpdated => "updated pragma",
            Self::SafeMathRemoved => "removed SafeMath",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Accumulates the rewrites applied to one file.
///
/// Both flags start unset and are only ever raised; the order in which lines
/// record changes does not affect the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pragma_updated: bool,
    safe_math_removed: bool,
}

impl ChangeSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pragma_updated: false,
            safe_math_removed: false,
        }
    }

    /// Records that a change of the given kind happened.
    pub const fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::PragmaUpdated => self.pragma_updated = true,
            ChangeKind::SafeMathRemoved => self.safe_math_removed = true,
        }
    }

    /// Whether a pragma was rewritten.
    #[must_use]
    pub const fn pragma_updated(self) -> bool {
        self.pragma_updated
    }

    /// Whether SafeMath imports or calls were removed.
    #[must_use]
    pub const fn safe_math_removed(self) -> bool {
        self.safe_math_removed
    }

    /// Whether the file content differs from the input.
    #[must_use]
    pub const fn any_change(self) -> bool {
        self.pragma_updated || self.safe_math_removed
    }

    /// Yields the recorded changes in report order: pragma first, then
    /// SafeMath.
    pub fn changes(self) -> impl Iterator<Item = ChangeKind> {
        [
            (self.pragma_updated, ChangeKind::PragmaUpdated),
            (self.safe_math_removed, ChangeKind::SafeMathRemoved),
        ]
        .into_iter()
        .filter_map(|(recorded, kind)| recorded.then_some(kind))
    }

    /// Joins the recorded change descriptions with `", "`.
    ///
    /// Returns an empty string when nothing changed.
    #[must_use]
    pub fn describe(self) -> String {
        self.changes()
            .map(ChangeKind::description)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
