//! Application layer errors.
//!
//! These errors represent failures in orchestration, not request validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materialising a service.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Service directory already exists under the services root.
    #[error("Service '{name}' already exists at {path}")]
    ServiceExists { name: String, path: PathBuf },

    /// Something is already at a path that had to be created fresh.
    #[error("Path already exists: {path}")]
    PathExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// An adapter's internal lock was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ServiceExists { name, path } => vec![
                format!("Directory already exists: {}", path.display()),
                format!("Choose a different name than '{}'", name),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::PathExists { path } => vec![
                format!("Something already occupies {}", path.display()),
                "Remove it or choose another name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the services directory is reachable".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("A partial service may remain at {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ServiceExists { .. } | Self::PathExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
