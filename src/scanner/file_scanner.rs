//! Source directory listing and file classification

use anyhow::{Context, Result};
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

/// Check whether a directory entry is a regular file
///
/// Symlinks are not followed, so a link to a file is not a regular file.
/// Entries whose type cannot be read are treated as non-files.
pub fn is_regular_file(entry: &DirEntry) -> bool {
    entry
        .file_type()
        .map(|file_type| file_type.is_file())
        .unwrap_or(false)
}

/// Collect the regular files directly inside `dir`
///
/// The listing is deliberately flat: subdirectories (including a previous
/// run's `duplicates` folder) are never descended into.
///
/// # Arguments
/// * `dir` - Directory to scan
///
/// # Returns
/// Vector of file paths, in the order the filesystem reports them
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list source directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read an entry of {}", dir.display()))?;
        if is_regular_file(&entry) {
            files.push(entry.path());
        } else {
            log::trace!("Skipping non-regular entry {}", entry.path().display());
        }
    }

    Ok(files)
}
