//! Integration tests for error isolation
//!
//! A file that cannot be read or moved must not stop the rest of the batch,
//! and nothing already moved is rolled back.

use dupe_mover_rs::prelude::*;
use std::fs;
use tempfile::TempDir;

const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

/// Test that a missing source directory is a fatal error
#[test]
fn test_missing_source_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let result = run(&RunConfig::new(temp_dir.path().join("missing")));
    assert!(result.is_err(), "Unlistable source must abort the run");
}

/// Test that a source path pointing at a file is a fatal error
#[test]
fn test_source_is_a_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, b"hello").unwrap();

    assert!(run(&RunConfig::new(&file)).is_err());
}

/// Test that an unreadable file is dropped and left untouched
#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked.txt");
    fs::write(temp_dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(temp_dir.path().join("b.txt"), b"hello").unwrap();
    fs::write(&locked, b"hello").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read(&locked).is_ok() {
        // Privileged users can read regardless of mode bits
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let summary = run(&RunConfig::new(temp_dir.path())).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert_eq!(summary.scanned, 3);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.moved_count(), 2);
    assert!(locked.exists(), "Unreadable file must stay in place");
    assert!(!temp_dir.path().join("duplicates").join(HELLO_MD5).join("locked.txt").exists());
}

/// Test that a listed file which can no longer be read is dropped while its
/// duplicates are still hashed, grouped and moved
#[test]
fn test_vanished_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(temp_dir.path().join("b.txt"), b"hello").unwrap();
    fs::write(temp_dir.path().join("c.txt"), b"hello").unwrap();

    let files = collect_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 3);
    fs::remove_file(temp_dir.path().join("c.txt")).unwrap();

    let records = hash_files(&files, DigestFormat::Canonical);
    assert_eq!(records.len(), 2);
    let groups = duplicate_groups(group_by_digest(records));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].digest, HELLO_MD5);

    let summary = process_files(&RunConfig::new(temp_dir.path()), &files).unwrap();
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.moved_count(), 2);
    assert!(summary.failures.is_empty());
    assert_eq!(ExitStatus::from_summary(&summary), ExitStatus::PartialFailure);

    let digest_dir = temp_dir.path().join("duplicates").join(HELLO_MD5);
    assert!(digest_dir.join("a.txt").exists());
    assert!(digest_dir.join("b.txt").exists());
    assert!(!digest_dir.join("c.txt").exists());
}

/// Test that a destination collision fails only that file
#[test]
fn test_collision_fails_one_file_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let digest_dir = temp_dir.path().join("duplicates").join(HELLO_MD5);
    fs::create_dir_all(&digest_dir).unwrap();
    fs::write(digest_dir.join("a.txt"), b"from an earlier run").unwrap();

    fs::write(temp_dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(temp_dir.path().join("b.txt"), b"hello").unwrap();

    let summary = run(&RunConfig::new(temp_dir.path())).unwrap();

    assert_eq!(summary.moved_count(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].path, temp_dir.path().join("a.txt"));
    assert_eq!(ExitStatus::from_summary(&summary), ExitStatus::PartialFailure);

    // No rollback: b.txt stays moved, a.txt stays put, the old file is intact
    assert!(digest_dir.join("b.txt").exists());
    assert!(temp_dir.path().join("a.txt").exists());
    assert_eq!(fs::read(digest_dir.join("a.txt")).unwrap(), b"from an earlier run");
}

/// Test that a duplicates root blocked by a plain file is fatal
#[test]
fn test_blocked_duplicates_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("duplicates"), b"not a directory").unwrap();
    fs::write(temp_dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(temp_dir.path().join("b.txt"), b"hello").unwrap();

    let err = run(&RunConfig::new(temp_dir.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to create duplicates directory"));
    assert!(temp_dir.path().join("a.txt").exists());
    assert!(temp_dir.path().join("b.txt").exists());
}
