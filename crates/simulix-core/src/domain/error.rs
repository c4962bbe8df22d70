// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside reports and wrapped errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("template '{template}' references undefined key '{key}'")]
    MissingKey { key: String, template: String },

    #[error("invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    // ========================================================================
    // Archive Layout Errors
    // ========================================================================
    #[error("archive layout does not follow the naming convention: {reason}")]
    NamingConventionMismatch { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingKey { key, template } => vec![
                format!("'{}' uses the placeholder {{{}}}", template, key),
                "Check that the archive layout provides the key".into(),
                "Or supply it from an extension's [template_info] table".into(),
                "Literal braces in templates must be written as {{ and }}".into(),
            ],
            Self::InvalidTemplate { template, .. } => vec![
                format!("Fix the placeholder syntax in '{}'", template),
                "Literal braces in templates must be written as {{ and }}".into(),
            ],
            Self::NamingConventionMismatch { reason } => vec![
                format!("Archive layout problem: {}", reason),
                "Expected a version folder (e.g. R2019b), an optional otherFiles folder".into(),
                "and one model folder containing <model>_<target>_rtw".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingKey { .. } | Self::InvalidTemplate { .. } => ErrorCategory::Template,
            Self::NamingConventionMismatch { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
