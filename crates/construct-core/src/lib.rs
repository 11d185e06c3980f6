//! Construct Core
//!
//! Domain and application layers for the Construct PHP project scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          construct-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldService              │
//! │      (generate → write → git init)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │         (Filesystem, VcsInit)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    construct-adapters (Infrastructure)  │
//! │     (LocalFilesystem, GitCli, ...)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (ProjectName, option sets, Manifest) and the Generator
//! are pure: no I/O, deterministic output for identical requests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use construct_core::{
//!     application::ScaffoldService,
//!     domain::{GenerationRequest, License, ProjectName, TestingFramework, DEFAULT_NAMESPACE},
//!     generator::Generator,
//! };
//!
//! let name = ProjectName::parse("acme/widget")?;
//! let request = GenerationRequest::new(
//!     name,
//!     TestingFramework::Phpunit,
//!     License::Mit,
//!     DEFAULT_NAMESPACE,
//!     false,
//! );
//!
//! let service = ScaffoldService::new(Generator::new(), filesystem, vcs);
//! let summary = service.scaffold(&request)?;
//! # Ok::<(), construct_core::error::ConstructError>(())
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Manifest generation
pub mod generator;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, ScaffoldSummary, VcsStatus,
        ports::{Filesystem, VcsInit},
    };
    pub use crate::domain::{
        DEFAULT_NAMESPACE, GenerationRequest, License, Manifest, ManifestEntry, OptionSet,
        ProjectName, Resolved, TestingFramework,
    };
    pub use crate::error::{ConstructError, ConstructResult};
    pub use crate::generator::Generator;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
