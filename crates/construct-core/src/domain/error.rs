//! Domain-level errors.

use thiserror::Error;

/// Errors raised by domain validation.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project name does not match `vendor/project`. This is the one
    /// hard failure in the system — it aborts generation entirely.
    #[error("\"{name}\" is not a valid project name, please use \"vendor/project\" ({reason})")]
    InvalidProjectName { name: String, reason: String },

    #[error("generated manifest is empty")]
    EmptyManifest,

    #[error("duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed in manifest: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, .. } => vec![
                format!("\"{name}\" cannot be used as a project name"),
                "Use the form vendor/project, e.g. acme/widget".into(),
                "Both segments may contain letters, digits, '_', '.' and '-'".into(),
            ],
            Self::EmptyManifest | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec!["This is a bug in the generator, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
