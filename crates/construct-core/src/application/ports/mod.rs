//! Driven (output) ports — implemented by infrastructure.
//!
//! The core computes manifests; these traits are what it needs from the
//! outside world to make them real. `construct-adapters` provides the
//! implementations.

use std::path::Path;

use crate::error::ConstructResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `construct_adapters::filesystem::LocalFilesystem` (production)
/// - `construct_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ConstructResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ConstructResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for version-control initialization.
///
/// Implemented by:
/// - `construct_adapters::vcs::GitCli` (shells out to `git init`)
pub trait VcsInit: Send + Sync {
    /// Initialize an empty repository in `root`.
    fn init(&self, root: &Path) -> ConstructResult<()>;
}
