//! File scanning, hashing and grouping

pub mod file_scanner;
pub mod duplicate_detector;

pub use file_scanner::{collect_files, is_regular_file};
pub use duplicate_detector::{
    compute_file_digest, digest_bytes, duplicate_groups, group_by_digest, render_digest,
    to_file_record, DigestFormat, DigestGroups, DuplicateGroup, FileRecord,
};
