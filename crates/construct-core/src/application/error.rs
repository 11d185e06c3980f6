//! Application layer errors.
//!
//! These represent failures in orchestration and I/O collaborators, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a manifest.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The output root already exists. Nothing is written.
    #[error("project directory already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A collaborator failed to write a file or directory. Files written
    /// before the failure are left in place — there is no rollback.
    #[error("failed to write {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    /// `git init` (or equivalent) failed. Already-written files are kept.
    #[error("version control initialization failed: {reason}")]
    VcsInitFailure { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::WriteFailure { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::VcsInitFailure { .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                "The generated files are intact; run `git init` manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::WriteFailure { .. } | Self::VcsInitFailure { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_exists_suggests_alternatives() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("widget"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("different")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn vcs_failure_mentions_manual_init() {
        let err = ApplicationError::VcsInitFailure {
            reason: "git not found".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("git init")));
    }
}
