//! Core domain layer for svcgen.
//!
//! This module contains pure logic with no I/O. Everything that touches the
//! filesystem goes through the ports in `crate::application::ports`.
//!
//! - **Entities**: the validated [`ScaffoldRequest`] and the planned
//!   [`ServiceStructure`]
//! - **Templates**: the seven typed [`ServiceTemplate`] functions
//! - **Layout**: where services live in a workspace
pub mod entities;
pub mod error;
pub mod layout;
pub mod templates;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    request::{Port, ScaffoldRequest, ServiceName},
    service_structure::{DirectoryToCreate, FileToWrite, FsEntry, ServiceStructure},
};

pub use error::{DomainError, ErrorCategory};

pub use layout::{SERVICE_DIRECTORIES, SERVICES_DIR, WorkspaceLayout};
pub use templates::{PackageManifest, RenderedFile, ServiceTemplate, render_all};
