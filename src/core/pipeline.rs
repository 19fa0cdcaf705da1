//! The single deduplication pass: list, hash, group, filter, move

use anyhow::Result;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::path::PathBuf;

use super::mover::{ensure_duplicates_root, move_duplicates, MoveFailure, MovedFile};
use crate::scanner::duplicate_detector::{
    duplicate_groups, group_by_digest, to_file_record, DigestFormat, FileRecord,
};
use crate::scanner::file_scanner::collect_files;

/// Name of the folder created inside the source directory
pub const DUPLICATES_DIR_NAME: &str = "duplicates";

/// Settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    pub duplicates_dir_name: String,
    pub digest_format: DigestFormat,
    pub show_progress: bool,
}

impl RunConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            duplicates_dir_name: DUPLICATES_DIR_NAME.to_string(),
            digest_format: DigestFormat::default(),
            show_progress: false,
        }
    }

    pub fn duplicates_root(&self) -> PathBuf {
        self.source_dir.join(&self.duplicates_dir_name)
    }
}

/// What a run did
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Regular files found in the source directory
    pub scanned: usize,
    /// Files that were read and hashed
    pub hashed: usize,
    /// Groups with more than one member
    pub duplicate_groups: usize,
    pub moved: Vec<MovedFile>,
    pub failures: Vec<MoveFailure>,
}

impl RunSummary {
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    /// Files dropped because they could not be read
    pub fn skipped(&self) -> usize {
        self.scanned - self.hashed
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn hash_with_progress(files: &[PathBuf], format: DigestFormat, progress: &ProgressBar) -> Vec<FileRecord> {
    files
        .iter()
        .progress_with(progress.clone())
        .filter_map(|path| to_file_record(path, format))
        .collect()
}

/// Hash every listed file, dropping the ones that cannot be read
pub fn hash_files(files: &[PathBuf], format: DigestFormat) -> Vec<FileRecord> {
    hash_with_progress(files, format, &ProgressBar::hidden())
}

/// Run one pass over `config.source_dir`
///
/// Fails only if the source cannot be listed or the duplicates root cannot
/// be created. Unreadable files are dropped and move failures are collected
/// in the summary.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let files = collect_files(&config.source_dir)?;
    log::info!(
        "Found {} regular file(s) in {}",
        files.len(),
        config.source_dir.display()
    );
    process_files(config, &files)
}

/// Hash, group and move an already listed set of files
pub fn process_files(config: &RunConfig, files: &[PathBuf]) -> Result<RunSummary> {
    let progress = progress_bar(files.len(), config.show_progress)?;
    let records = hash_with_progress(files, config.digest_format, &progress);
    progress.finish_and_clear();

    let mut summary = RunSummary {
        scanned: files.len(),
        hashed: records.len(),
        ..RunSummary::default()
    };

    let groups = duplicate_groups(group_by_digest(records));
    summary.duplicate_groups = groups.len();
    log::info!("Found {} group(s) of duplicate files", groups.len());
    if groups.is_empty() {
        return Ok(summary);
    }

    let root = config.duplicates_root();
    ensure_duplicates_root(&root)?;

    let outcome = move_duplicates(&root, &groups);
    summary.moved = outcome.moved;
    summary.failures = outcome.failures;
    Ok(summary)
}
