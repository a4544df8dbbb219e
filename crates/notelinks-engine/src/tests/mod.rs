//! Shared helpers for unit tests.

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_notes_dir() -> TempDir {
    TempDir::new().expect("failed to create temp notes dir")
}

pub fn create_test_file(notes_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = notes_dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path
}
