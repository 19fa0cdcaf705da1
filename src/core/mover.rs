//! Relocation of duplicate files into per-digest folders

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scanner::duplicate_detector::{DuplicateGroup, FileRecord};

/// A file that was moved into the duplicates tree
#[derive(Debug, Clone, Serialize)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub digest: String,
    pub size: u64,
}

/// A file that could not be moved; it stays where it was
#[derive(Debug)]
pub struct MoveFailure {
    pub path: PathBuf,
    pub destination: PathBuf,
    pub error: io::Error,
}

/// Outcome of moving every member of the duplicate groups
#[derive(Debug, Default)]
pub struct MoveOutcome {
    pub moved: Vec<MovedFile>,
    pub failures: Vec<MoveFailure>,
}

impl MoveOutcome {
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }
}

/// Create the duplicates root and any missing ancestors
pub fn ensure_duplicates_root(root: &Path) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create duplicates directory {}", root.display()))
}

/// Destination of a record inside `root`: `<root>/<digest>/<file name>`
pub fn destination_for(root: &Path, record: &FileRecord) -> io::Result<PathBuf> {
    let file_name = record.path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", record.path.display()),
        )
    })?;
    Ok(root.join(&record.digest).join(file_name))
}

fn relocate(record: &FileRecord, destination: &Path) -> io::Result<()> {
    if let Some(digest_dir) = destination.parent() {
        fs::create_dir_all(digest_dir)?;
    }

    if fs::symlink_metadata(destination).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", destination.display()),
        ));
    }

    fs::rename(&record.path, destination)
}

/// Move a single record into its digest folder
///
/// An existing file at the destination is never replaced.
pub fn move_record(root: &Path, record: &FileRecord) -> io::Result<PathBuf> {
    let destination = destination_for(root, record)?;
    relocate(record, &destination)?;
    Ok(destination)
}

/// Move every member of every group into `root`
///
/// Failures are reported and collected; they neither stop the batch nor
/// undo moves that already happened.
pub fn move_duplicates(root: &Path, groups: &[DuplicateGroup]) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for group in groups {
        for record in &group.records {
            let (destination, moved) = match destination_for(root, record) {
                Ok(destination) => {
                    let moved = relocate(record, &destination);
                    (destination, moved)
                }
                Err(e) => (root.join(&record.digest), Err(e)),
            };

            match moved {
                Ok(()) => {
                    log::info!("Moved {} -> {}", record.path.display(), destination.display());
                    outcome.moved.push(MovedFile {
                        from: record.path.clone(),
                        to: destination,
                        digest: record.digest.clone(),
                        size: record.size,
                    });
                }
                Err(e) => {
                    eprintln!("Error moving {}: {}", record.path.display(), e);
                    outcome.failures.push(MoveFailure {
                        path: record.path.clone(),
                        destination,
                        error: e,
                    });
                }
            }
        }
    }

    outcome
}
