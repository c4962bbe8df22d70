// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Simulix.
//!
//! This module contains the pure rules of workspace generation: archive
//! naming conventions, the template catalog, placeholder substitution, and
//! the definitions directive. All I/O is handled via ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or archive access
//! - **Few external crates**: std, thiserror, regex, serde
//! - **Value types**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod archive;
pub mod definitions;
pub mod error;
pub mod metadata;
pub mod naming;
pub mod template;

// Re-exports for convenience
pub use archive::{PACKAGE_EXTENSION, ZIP_EXTENSION, archive_file_path, top_level_names};
pub use definitions::{MANIFEST_FILE_NAME, SENTINEL_DEFINITION};
pub use error::{DomainError, ErrorCategory};
pub use metadata::{Metadata, keys};
pub use naming::{RESERVED_FOLDER, SHORT_NAME_LIMIT, TopLevelRole};
pub use template::{DEFAULT_CATALOG, TemplateDescriptor, render_template};
