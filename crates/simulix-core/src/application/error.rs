//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! template rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while assembling a workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The archive path is not an existing regular file.
    #[error("Couldn't find the specified archive: {}", path.display())]
    ArchiveNotFound { path: PathBuf },

    /// The archive exists but cannot be read or extracted.
    #[error("Failed to extract archive {}: {reason}", path.display())]
    ArchiveError { path: PathBuf, reason: String },

    /// An extension descriptor is present but unusable.
    #[error("Failed to load extension {}: {reason}", path.display())]
    ExtensionLoad { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ArchiveNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Pass the archive name, with or without its extension".into(),
                "Use --zip-path when the archive is not in the current directory".into(),
            ],
            Self::ArchiveError { .. } => vec![
                "Check that the file is a valid zip archive".into(),
                "Regenerate the code archive from the modeling tool".into(),
            ],
            Self::ExtensionLoad { path, .. } => vec![
                format!("Check the extension descriptor: {}", path.display()),
                "Values in [template_info] may only reference known keys".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the template root contains templates/, includes/ and libraryincludes/"
                    .into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArchiveNotFound { .. } => ErrorCategory::NotFound,
            Self::ArchiveError { .. } => ErrorCategory::Validation,
            Self::ExtensionLoad { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
