//! Unified error handling for Simulix Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Simulix Core operations.
///
/// Every failure aborts the generation run; the variants only exist so the
/// CLI can pick a message, suggestions and exit code.
#[derive(Debug, Error, Clone)]
pub enum SimulixError {
    /// Errors from the domain layer (templates, naming conventions).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (archives, extensions, I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SimulixError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Simulix".into(),
                "Please report this issue at: https://github.com/simulix/simulix/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SimulixResult<T> = Result<T, SimulixError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_archive_is_not_found() {
        let err: SimulixError = ApplicationError::ArchiveNotFound {
            path: PathBuf::from("default.zip"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("default.zip"));
    }

    #[test]
    fn missing_key_is_template_error() {
        let err: SimulixError = DomainError::MissingKey {
            key: "modelName".into(),
            template: "exemain_template.c".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Template);
        assert!(err.suggestions().iter().any(|s| s.contains("{modelName}")));
    }

    #[test]
    fn extension_failure_is_configuration() {
        let err: SimulixError = ApplicationError::ExtensionLoad {
            path: PathBuf::from("ext/extension.toml"),
            reason: "bad toml".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
