//! Whole-file detection of SafeMath usage.
//!
//! Call sites such as `.add(` are only rewritten when the file shows evidence
//! that SafeMath is in play; the same token sequence may belong to an
//! unrelated library with different semantics. Detection is a coarse textual
//! check over the entire file and is not scoped to a particular contract.

const USING_DECLARATION: &str = "using SafeMath";
const IMPORT_KEYWORD: &str = "import";
const LIBRARY_NAME: &str = "SafeMath";

/// Evidence of SafeMath usage found in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeMathUsage {
    /// The file contains a `using SafeMath` declaration.
    UsingDeclaration,
    /// The file mentions both `import` and `SafeMath`.
    Import,
    /// No evidence was found; call sites must be left alone.
    Absent,
}

impl SafeMathUsage {
    /// Returns true when rewriting SafeMath imports and calls is licensed.
    #[must_use]
    pub const fn is_in_use(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Inspects the full file content once, before any line is rewritten.
#[must_use]
pub fn detect_safe_math_usage(content: &str) -> SafeMathUsage {
    if content.contains(USING_DECLARATION) {
        SafeMathUsage::UsingDeclaration
    } else if content.contains(IMPORT_KEYWORD) && content.contains(LIBRARY_NAME) {
        SafeMathUsage::Import
    } else {
        SafeMathUsage::Absent
    }
}
