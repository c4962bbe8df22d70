//! Application layer for Simulix.
//!
//! This layer contains:
//! - **Services**: one per generation step, plus the `WorkspaceAssembler`
//!   orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming rules, placeholder substitution and the definitions directive live
//! in `crate::domain`; services only sequence them around I/O.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerationReport, GenerationRequest, PackageRequest, TemplateRenderer, WorkspaceAssembler,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ArchiveExtractor, Extension, ExtensionLoader, Filesystem};

pub use error::ApplicationError;
