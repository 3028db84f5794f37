// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI re-renders them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Request Validation Errors
    // ========================================================================
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Port must be a number, got '{value}'")]
    InvalidPort { value: String },

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Service structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in service structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { .. } => vec![
                "The service name becomes a directory under services/".into(),
                "Use a single name without path separators, e.g. order, user-profile".into(),
            ],
            Self::InvalidPort { value } => vec![
                format!("'{}' is not an integer", value),
                "Example: create-service order 3003".into(),
            ],
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => vec![
                "The built-in service templates are inconsistent".into(),
                "Please report this issue".into(),
            ],
            Self::EmptyStructure => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } | Self::InvalidPort { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_are_validation() {
        let err = DomainError::InvalidPort {
            value: "abc".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Port must be a number, got 'abc'");
    }

    #[test]
    fn structure_errors_are_internal() {
        let err = DomainError::DuplicatePath {
            path: "index.js".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn invalid_port_suggestion_echoes_value() {
        let err = DomainError::InvalidPort {
            value: "30o3".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("30o3")));
    }
}
