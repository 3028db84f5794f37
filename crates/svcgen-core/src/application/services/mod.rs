//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "scaffold a service".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldReport, ScaffoldService};
