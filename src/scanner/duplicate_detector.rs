//! Content hashing and grouping of files by MD5 digest

use anyhow::Result;
use md5::{Digest, Md5};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// How a raw digest is rendered into the folder name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestFormat {
    /// Fixed-width, zero-padded lowercase hex (32 characters for MD5)
    #[default]
    Canonical,
    /// Lowercase hex with leading zero nibbles dropped, as a big-integer
    /// rendering produces. An all-zero digest renders as `"0"`.
    Trimmed,
}

/// A successfully hashed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub digest: String,
}

/// Files sharing one digest, in discovery order
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub digest: String,
    pub records: Vec<FileRecord>,
}

/// Mapping from digest to every record carrying it
pub type DigestGroups = HashMap<String, Vec<FileRecord>>;

/// Render digest bytes as lowercase hex
pub fn render_digest(bytes: &[u8], format: DigestFormat) -> String {
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    match format {
        DigestFormat::Canonical => hex,
        DigestFormat::Trimmed => {
            let trimmed = hex.trim_start_matches('0');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// Compute the MD5 digest of in-memory content
pub fn digest_bytes(data: &[u8], format: DigestFormat) -> String {
    let result = Md5::digest(data);
    render_digest(&result, format)
}

/// Compute the MD5 digest of a file
///
/// The whole file is read into memory before hashing.
///
/// # Arguments
/// * `path` - Path to the file
/// * `format` - Digest rendering
///
/// # Returns
/// The rendered digest and the number of bytes read
pub fn compute_file_digest(path: &Path, format: DigestFormat) -> Result<(String, u64)> {
    let data = fs::read(path)?;
    Ok((digest_bytes(&data, format), data.len() as u64))
}

/// Hash a file into a `FileRecord`
///
/// Returns `None` when the file cannot be read; such files take no further
/// part in grouping.
pub fn to_file_record(path: &Path, format: DigestFormat) -> Option<FileRecord> {
    match compute_file_digest(path, format) {
        Ok((digest, size)) => {
            log::debug!("Hashed {} ({} bytes) -> {}", path.display(), size, digest);
            Some(FileRecord {
                path: path.to_path_buf(),
                size,
                digest,
            })
        }
        Err(e) => {
            log::debug!("Dropping unreadable file {}: {}", path.display(), e);
            None
        }
    }
}

/// Group records by digest, preserving discovery order within each group
pub fn group_by_digest<I>(records: I) -> DigestGroups
where
    I: IntoIterator<Item = FileRecord>,
{
    let mut groups: DigestGroups = HashMap::new();
    for record in records {
        groups.entry(record.digest.clone()).or_default().push(record);
    }
    groups
}

/// Keep only the groups with more than one member
///
/// Groups are returned sorted by digest.
pub fn duplicate_groups(groups: DigestGroups) -> Vec<DuplicateGroup> {
    let mut duplicates: Vec<DuplicateGroup> = groups
        .into_iter()
        .filter(|(_, records)| records.len() > 1)
        .map(|(digest, records)| DuplicateGroup { digest, records })
        .collect();
    duplicates.sort_by(|a, b| a.digest.cmp(&b.digest));
    duplicates
}
