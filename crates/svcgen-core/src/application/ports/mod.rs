//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented outside
//!   - `Filesystem`: File operations (`svcgen-adapters`)
//!   - `ProgressReporter`: Progress lines (CLI output layer)

pub mod output;

pub use output::{Filesystem, ProgressReporter, ScaffoldEvent, SilentReporter};

#[cfg(test)]
pub use output::MockFilesystem;
