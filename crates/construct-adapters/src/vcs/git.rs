//! Git adapter shelling out to the system `git` binary.

use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use construct_core::{
    application::{ApplicationError, ports::VcsInit},
    error::ConstructResult,
};

/// Runs `git init` in the project root via `std::process::Command`.
///
/// Blocking, invoked at most once per scaffold run. Output is captured so a
/// failing git does not scribble over the CLI's own output.
#[derive(Debug, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsInit for GitCli {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn init(&self, root: &Path) -> ConstructResult<()> {
        let output = Command::new("git")
            .arg("init")
            .current_dir(root)
            .output()
            .map_err(|e| ApplicationError::VcsInitFailure {
                reason: format!("could not run git: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::VcsInitFailure {
                reason: format!("git init exited with {}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        debug!("git init succeeded");
        Ok(())
    }
}
