//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `simulix-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ArchiveExtractor`: Archive extraction
//!   - `ExtensionLoader` / `Extension`: Optional template/metadata overrides
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ArchiveExtractor, Extension, ExtensionLoader, Filesystem};

#[cfg(test)]
pub use output::{MockArchiveExtractor, MockExtension, MockExtensionLoader, MockFilesystem};
