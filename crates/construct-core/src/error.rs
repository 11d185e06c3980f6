//! Unified error handling for Construct Core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single surface with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Result type alias for core operations.
pub type ConstructResult<T> = Result<T, ConstructError>;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum ConstructError {
    /// Errors from the domain layer (validation failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O ports).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ConstructError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
