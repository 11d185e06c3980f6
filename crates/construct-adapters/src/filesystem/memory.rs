//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use construct_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ConstructResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Pre-create a directory so `exists` reports it (testing helper).
    pub fn seed_directory(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().directories.insert(path.into());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ConstructResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::WriteFailure {
            path: path.to_path_buf(),
            reason: "filesystem lock poisoned".into(),
        })?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ConstructResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::WriteFailure {
            path: path.to_path_buf(),
            reason: "filesystem lock poisoned".into(),
        })?;

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
