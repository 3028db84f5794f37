//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides the filesystem implementations; the
//! CLI provides the progress reporter.

use std::path::{Path, PathBuf};

use crate::error::SvcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Create exactly one directory whose parent already exists.
    ///
    /// Fails with `ApplicationError::PathExists` if anything is already at
    /// `path`, a dangling symlink included.
    fn create_dir(&self, path: &Path) -> SvcgenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Check if anything is at `path`. Symlinks are not followed.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()>;
}

/// Something that happened during a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// A directory now exists. Absolute (or services-root-relative) path.
    DirectoryCreated(PathBuf),
    /// A file was written. Path relative to the service directory.
    FileWritten(PathBuf),
}

/// Port for progress output.
///
/// Called once after each directory and file creation, in order.
pub trait ProgressReporter {
    fn report(&self, event: &ScaffoldEvent);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _event: &ScaffoldEvent) {}
}
