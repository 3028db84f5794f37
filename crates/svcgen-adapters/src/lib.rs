//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen-core::application::ports`.
//! It contains all filesystem I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
