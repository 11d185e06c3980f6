//! The generation manifest: what gets written, where.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// An ordered list of files to be materialized under a project root.
///
/// Produced by the generator, consumed by the filesystem port. Pure data —
/// no I/O happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    root: PathBuf,
    entries: Vec<ManifestEntry>,
}

/// One rendered output file: a root-relative path and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub content: String,
}

impl Manifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// The output directory, relative to the invocation directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.entries.push(ManifestEntry {
            path: path.into(),
            content: content.into(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry's content by its root-relative path.
    pub fn content_of(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.content.as_str())
    }

    /// Reject empty manifests, duplicate paths, and absolute paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyManifest);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path_str = entry.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
            if entry.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_preserve_insertion_order() {
        let mut manifest = Manifest::new("widget");
        manifest.add_file("composer.json", "{}");
        manifest.add_file("README.md", "# widget");

        let paths: Vec<_> = manifest.entries().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("composer.json"), PathBuf::from("README.md")]
        );
    }

    #[test]
    fn content_lookup_by_path() {
        let mut manifest = Manifest::new("widget");
        manifest.add_file("README.md", "# widget");

        assert_eq!(manifest.content_of("README.md"), Some("# widget"));
        assert_eq!(manifest.content_of("LICENSE.md"), None);
    }

    #[test]
    fn empty_manifest_is_invalid() {
        assert!(matches!(
            Manifest::new("widget").validate(),
            Err(DomainError::EmptyManifest)
        ));
    }

    #[test]
    fn duplicate_path_is_invalid() {
        let mut manifest = Manifest::new("widget");
        manifest.add_file("README.md", "a");
        manifest.add_file("README.md", "b");

        assert!(matches!(
            manifest.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn absolute_path_is_invalid() {
        let mut manifest = Manifest::new("widget");
        manifest.add_file("/etc/passwd", "nope");

        assert!(matches!(
            manifest.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
