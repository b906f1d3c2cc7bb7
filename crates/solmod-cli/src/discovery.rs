//! Recursive discovery of Solidity sources.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::DiscoveryError;

/// Extension identifying Solidity sources.
const SOLIDITY_EXTENSION: &str = "sol";

/// Returns every `.sol` file under `root`, sorted by path.
///
/// Symbolic links are followed, so a linked `.sol` file is reported under its
/// link path and a linked directory is walked. A link cycle fails the walk.
/// Sorting keeps the report order stable across platforms and filesystems.
pub(crate) fn find_solidity_files(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_solidity_source(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "discovered Solidity files");
    Ok(files)
}

fn is_solidity_source(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == SOLIDITY_EXTENSION)
}
