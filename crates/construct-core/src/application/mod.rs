//! Application layer: orchestration over the domain.
//!
//! The service here coordinates the generator with the output ports; it
//! contains no template or validation logic of its own.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ScaffoldService, ScaffoldSummary, VcsStatus};
