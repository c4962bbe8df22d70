//! Directory-based extensions described by an `extension.toml` descriptor.
//!
//! # Directory layout expected
//!
//! ```text
//! acme-target/
//! ├── extension.toml           ← descriptor (required)
//! └── templates/               ← optional overrides, same file names
//!     └── CMakeLists_template.txt
//! ```
//!
//! # `extension.toml` format
//!
//! ```toml
//! [extension]
//! name = "acme-target"          # optional, defaults to the directory name
//!
//! # Optional. Each value is a template rendered against the metadata
//! # derived from the archive, so it may reference `{modelName}` etc.
//! [template_info]
//! targetName = "{modelName}_acme"
//! ```

mod descriptor;
mod directory;

pub use descriptor::{DESCRIPTOR_FILE, DescriptorExtensionLoader, ExtensionDescriptor};
pub use directory::DirectoryExtension;
