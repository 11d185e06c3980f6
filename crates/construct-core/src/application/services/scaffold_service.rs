//! Scaffold service — main application orchestrator.
//!
//! Coordinates the whole workflow:
//! 1. Refuse an existing output root
//! 2. Generate and validate the manifest
//! 3. Write every entry through the filesystem port
//! 4. Optionally initialize version control
//!
//! Generation is pure; all effects go through the injected ports.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, VcsInit},
    },
    domain::{GenerationRequest, Manifest},
    error::{ConstructError, ConstructResult},
    generator::Generator,
};

/// What happened to the requested `git init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsStatus {
    /// The request did not ask for version control.
    NotRequested,
    /// `git init` succeeded in the output root.
    Initialized,
    /// `git init` failed; generated files are untouched.
    Failed(String),
}

/// Result of a successful scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub root: PathBuf,
    pub files_written: usize,
    pub vcs: VcsStatus,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    generator: Generator,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VcsInit>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(generator: Generator, filesystem: Box<dyn Filesystem>, vcs: Box<dyn VcsInit>) -> Self {
        Self {
            generator,
            filesystem,
            vcs,
        }
    }

    /// Scaffold a new project from a validated request.
    ///
    /// A write failure aborts with already-written files left in place; a
    /// version-control failure is recorded in the summary instead of
    /// failing the run.
    #[instrument(skip_all, fields(project = %request.name()))]
    pub fn scaffold(&self, request: &GenerationRequest) -> ConstructResult<ScaffoldSummary> {
        let manifest = self.generator.generate(request);
        manifest.validate().map_err(ConstructError::Domain)?;

        if self.filesystem.exists(manifest.root()) {
            return Err(ApplicationError::ProjectExists {
                path: manifest.root().to_path_buf(),
            }
            .into());
        }

        self.write_manifest(&manifest)?;
        info!(
            files = manifest.entry_count(),
            root = %manifest.root().display(),
            "scaffold written"
        );

        let vcs = if request.git() {
            match self.vcs.init(manifest.root()) {
                Ok(()) => {
                    info!("git repository initialized");
                    VcsStatus::Initialized
                }
                Err(e) => {
                    warn!(error = %e, "version control initialization failed");
                    VcsStatus::Failed(e.to_string())
                }
            }
        } else {
            VcsStatus::NotRequested
        };

        Ok(ScaffoldSummary {
            root: manifest.root().to_path_buf(),
            files_written: manifest.entry_count(),
            vcs,
        })
    }

    /// Write every manifest entry, creating parent directories as needed.
    fn write_manifest(&self, manifest: &Manifest) -> ConstructResult<()> {
        self.filesystem.create_dir_all(manifest.root())?;

        for entry in manifest.entries() {
            let path = manifest.root().join(&entry.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &entry.content)?;
        }

        Ok(())
    }
}
