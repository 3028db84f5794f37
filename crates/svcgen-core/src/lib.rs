//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! service scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       svcgen-cli (create-service)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Filesystem, ProgressReporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     svcgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ScaffoldRequest, ServiceTemplate, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcgen_core::prelude::*;
//!
//! let request = ScaffoldRequest::parse("order", "3003")?;
//! let service = ScaffoldService::new(filesystem, WorkspaceLayout::new("./services"));
//! let report = service.scaffold(&request, &SilentReporter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, ProgressReporter, ScaffoldEvent, SilentReporter},
    };
    pub use crate::domain::{
        Port, ScaffoldRequest, ServiceName, ServiceStructure, ServiceTemplate, WorkspaceLayout,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
