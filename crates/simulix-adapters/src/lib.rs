//! Infrastructure adapters for Simulix.
//!
//! This crate implements the ports defined in `simulix-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod extension;
pub mod filesystem;

// Re-export commonly used adapters
pub use archive::ZipExtractor;
pub use extension::{DescriptorExtensionLoader, DirectoryExtension};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
