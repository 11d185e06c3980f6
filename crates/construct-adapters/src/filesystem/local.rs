//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use construct_core::{application::ports::Filesystem, error::ConstructResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ConstructResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ConstructResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error) -> construct_core::error::ConstructError {
    use construct_core::application::ApplicationError;

    ApplicationError::WriteFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_existence() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));

        let file = nested.join("hello.txt");
        fs.write_file(&file, "hi").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hi");
    }

    #[test]
    fn write_into_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let file = dir.path().join("missing/parent/file.txt");
        let err = fs.write_file(&file, "hi").unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
