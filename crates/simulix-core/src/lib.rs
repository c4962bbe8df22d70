//! Simulix Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Simulix, which
//! turns a model code-generation archive into a buildable workspace.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           simulix-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (WorkspaceAssembler and its steps)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ArchiveExtractor, Extension)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    simulix-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ZipExtractor, ...)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Metadata, naming rules, templates)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use simulix_core::prelude::*;
//!
//! let assembler = WorkspaceAssembler::new(filesystem, extractor, loader);
//! let report = assembler.assemble(&GenerationRequest {
//!     destination: "out".into(),
//!     template_root: "/opt/simulix".into(),
//!     archive: "default.zip".into(),
//!     extension: None,
//! })?;
//! println!("model: {:?}", report.metadata.get(keys::MODEL_NAME));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationRequest, PackageRequest, WorkspaceAssembler,
        ports::{ArchiveExtractor, Extension, ExtensionLoader, Filesystem},
    };
    pub use crate::domain::{Metadata, TemplateDescriptor, keys};
    pub use crate::error::{SimulixError, SimulixResult};
}
