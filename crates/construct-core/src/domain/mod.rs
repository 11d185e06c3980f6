//! Core domain layer for Construct.
//!
//! Pure business logic with no I/O: the validated project name, the
//! enumerated option sets with their fallback policy, the immutable
//! generation request, and the manifest of files to write. Filesystem and
//! process concerns live behind ports in the application layer.

pub mod error;
pub mod manifest;
pub mod name;
pub mod options;
pub mod request;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use manifest::{Manifest, ManifestEntry};
pub use name::ProjectName;
pub use options::{License, OptionSet, Resolved, TestingFramework};
pub use request::{DEFAULT_NAMESPACE, GenerationRequest};
