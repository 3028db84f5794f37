//! Unified error handling for svcgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for svcgen core operations.
#[derive(Debug, Error, Clone)]
pub enum SvcgenError {
    /// Errors from the domain layer (invalid request, inconsistent plan).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SvcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type SvcgenResult<T> = Result<T, SvcgenError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: SvcgenError = ApplicationError::ServiceExists {
            name: "order".into(),
            path: PathBuf::from("services/order"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Service 'order' already exists at services/order"
        );
    }

    #[test]
    fn categories_follow_inner_error() {
        let invalid_port: SvcgenError = DomainError::InvalidPort { value: "x".into() }.into();
        assert_eq!(invalid_port.category(), ErrorCategory::Validation);

        let lock: SvcgenError = ApplicationError::LockPoisoned.into();
        assert_eq!(lock.category(), ErrorCategory::Internal);

        let taken: SvcgenError = ApplicationError::PathExists {
            path: PathBuf::from("services/order"),
        }
        .into();
        assert_eq!(taken.category(), ErrorCategory::Validation);
    }
}
