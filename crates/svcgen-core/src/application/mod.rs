//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but renders nothing
//! itself. Request validation and templates live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProgressReporter, ScaffoldEvent, SilentReporter};

pub use error::ApplicationError;
