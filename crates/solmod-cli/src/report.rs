//! Human-readable reporting of per-file outcomes.

use std::fmt;
use std::path::Path;

use solmod_engine::ChangeSummary;

use crate::driver::{FileOutcome, WriteMode};

/// Builds the commit message subject for a changed file.
///
/// `relative` is the path relative to the scanned directory.
pub(crate) fn commit_message(relative: &Path, summary: ChangeSummary) -> String {
    format!("update {}: {}", relative.display(), summary.describe())
}

/// Renders the report line for one file.
pub(crate) fn outcome_line(
    path: &Path,
    root: &Path,
    outcome: FileOutcome,
    mode: WriteMode,
) -> String {
    match outcome {
        FileOutcome::Updated(summary) => {
            let relative = path.strip_prefix(root).unwrap_or(path);
            let verb = match mode {
                WriteMode::Write => "updated",
                WriteMode::DryRun => "would update",
            };
            format!(
                "{verb}: {} ({})",
                path.display(),
                commit_message(relative, summary)
            )
        }
        FileOutcome::Unchanged => format!("no changes needed: {}", path.display()),
    }
}

/// Totals across a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunTotals {
    pub(crate) updated: usize,
    pub(crate) unchanged: usize,
}

impl RunTotals {
    pub(crate) const fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Updated(_) => self.updated += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

impl fmt::Display for RunTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scanned = self.updated + self.unchanged;
        write!(
            f,
            "{scanned} file(s) scanned, {} updated, {} unchanged",
            self.updated, self.unchanged
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use solmod_engine::ChangeKind;

    fn summary(kinds: &[ChangeKind]) -> ChangeSummary {
        let mut summary = ChangeSummary::new();
        for kind in kinds {
            summary.record(*kind);
        }
        summary
    }

    #[test]
    fn commit_message_lists_changes() {
        let message = commit_message(
            Path::new("contracts/Token.sol"),
            summary(&[ChangeKind::PragmaUpdated, ChangeKind::SafeMathRemoved]),
        );
        assert_eq!(
            message,
            "update contracts/Token.sol: updated pragma, removed SafeMath"
        );
    }

    #[test]
    fn outcome_line_uses_relative_commit_path() {
        let root = PathBuf::from("repo");
        let path = root.join("contracts").join("Token.sol");
        let line = outcome_line(
            &path,
            &root,
            FileOutcome::Updated(summary(&[ChangeKind::PragmaUpdated])),
            WriteMode::Write,
        );
        let relative = Path::new("contracts").join("Token.sol");
        assert_eq!(
            line,
            format!(
                "updated: {} (update {}: updated pragma)",
                path.display(),
                relative.display()
            )
        );
    }

    #[test]
    fn dry_run_and_unchanged_lines() {
        let path = Path::new("A.sol");
        let root = Path::new("");
        let changed = outcome_line(
            path,
            root,
            FileOutcome::Updated(summary(&[ChangeKind::SafeMathRemoved])),
            WriteMode::DryRun,
        );
        assert_eq!(changed, "would update: A.sol (update A.sol: removed SafeMath)");
        assert_eq!(
            outcome_line(path, root, FileOutcome::Unchanged, WriteMode::Write),
            "no changes needed: A.sol"
        );
    }

    #[test]
    fn totals_count_outcomes() {
        let mut totals = RunTotals::default();
        totals.record(FileOutcome::Unchanged);
        totals.record(FileOutcome::Updated(ChangeSummary::new()));
        totals.record(FileOutcome::Unchanged);
        assert_eq!(
            totals.to_string(),
            "3 file(s) scanned, 1 updated, 2 unchanged"
        );
    }
}
