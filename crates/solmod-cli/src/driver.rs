//! Reads, transforms, and rewrites individual files.
//!
//! The driver owns each file for the duration of its processing window. The
//! content is read in full, handed to the engine, and written back in a
//! single atomic replace only when the engine reports a change.

use std::fs;
use std::io::Write as IoWrite;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use solmod_engine::{ChangeSummary, TransformOptions, transform_file};

use crate::errors::DriverError;

/// Whether changed files are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteMode {
    /// Replace changed files on disk.
    Write,
    /// Report changes without touching the filesystem.
    DryRun,
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileOutcome {
    /// The file needed changes; in [`WriteMode::Write`] they were written.
    Updated(ChangeSummary),
    /// The file already satisfied every rule.
    Unchanged,
}

pub(crate) struct FileDriver<'a> {
    options: &'a TransformOptions,
    mode: WriteMode,
}

impl<'a> FileDriver<'a> {
    pub(crate) const fn new(options: &'a TransformOptions, mode: WriteMode) -> Self {
        Self { options, mode }
    }

    /// Processes one file to completion.
    pub(crate) fn process(&self, path: &Path) -> Result<FileOutcome, DriverError> {
        let content = fs::read_to_string(path).map_err(|source| DriverError::read(path, source))?;
        let rewrite = transform_file(path, &content, self.options);
        let summary = rewrite.summary();

        debug!(
            path = %path.display(),
            usage = ?rewrite.usage(),
            pragma_updated = summary.pragma_updated(),
            safe_math_removed = summary.safe_math_removed(),
            "transformed file"
        );

        if !rewrite.has_changes() {
            return Ok(FileOutcome::Unchanged);
        }

        if self.mode == WriteMode::Write {
            replace_file(path, rewrite.output())?;
            info!(path = %path.display(), changes = %summary.describe(), "rewrote file");
        }

        Ok(FileOutcome::Updated(summary))
    }
}

/// Replaces `path` with `content` by renaming a sibling temporary file over
/// it. The original permissions are carried over. A symbolic link is
/// resolved first so the linked file is rewritten and the link survives.
fn replace_file(path: &Path, content: &str) -> Result<(), DriverError> {
    let target = fs::canonicalize(path).map_err(|source| DriverError::write(path, source))?;
    let parent = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)
        .map_err(|source| DriverError::write(path, source))?
        .permissions();

    let mut temp_file =
        NamedTempFile::new_in(parent).map_err(|source| DriverError::write(path, source))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|source| DriverError::write(path, source))?;
    temp_file
        .as_file()
        .set_permissions(permissions)
        .map_err(|source| DriverError::write(path, source))?;
    temp_file
        .persist(&target)
        .map_err(|err| DriverError::write(path, err.error))?;
    Ok(())
}
