use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory to hold test inputs or outputs
pub fn create_test_root() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with content under the test root
pub fn create_test_file(root: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = root.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
