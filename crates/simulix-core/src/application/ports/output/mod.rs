//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `simulix-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Metadata, TemplateDescriptor};
use crate::error::SimulixResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `simulix_adapters::filesystem::LocalFilesystem` (production)
/// - `simulix_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SimulixResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SimulixResult<String>;

    /// Replace a file's content.
    ///
    /// Implementations must not leave a partially written file behind: the
    /// previous content stays in place until the new content is complete.
    fn write_file(&self, path: &Path, content: &str) -> SimulixResult<()>;

    /// Append `line` as a new line, adding a line break before it if the file
    /// does not end with one.
    fn append_line(&self, path: &Path, line: &str) -> SimulixResult<()>;

    /// Copy a single file, overwriting the target.
    fn copy_file(&self, from: &Path, to: &Path) -> SimulixResult<()>;

    /// Copy the contents of `from` into `to` recursively, overwriting files.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> SimulixResult<()>;

    /// Names of the direct children of a directory, sorted.
    fn list_dir(&self, path: &Path) -> SimulixResult<Vec<String>>;

    /// First regular file called `file_name` below `root`.
    fn find_file(&self, root: &Path, file_name: &str) -> SimulixResult<Option<PathBuf>>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for archive extraction.
///
/// Implemented by:
/// - `simulix_adapters::archive::ZipExtractor`
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveExtractor: Send + Sync {
    /// Extract every entry of `archive` below `destination`.
    ///
    /// Returns the entry names (`/`-separated, as stored in the archive) in
    /// archive order, including entries that were skipped as unsafe.
    fn extract(&self, archive: &Path, destination: &Path) -> SimulixResult<Vec<String>>;
}

/// A loaded extension and the capabilities it offers.
///
/// Both capabilities are optional. Callers ask before using them instead of
/// probing for failures.
#[cfg_attr(test, mockall::automock)]
pub trait Extension: Send + Sync {
    /// Display name for diagnostics.
    fn name(&self) -> String;

    /// Whether [`Extension::supply_metadata`] has anything to offer.
    fn supplies_metadata(&self) -> bool;

    /// Metadata to merge over `current`. Values returned here win.
    fn supply_metadata(&self, current: &Metadata) -> SimulixResult<Metadata>;

    /// Root to render `template` from, if the extension overrides it.
    ///
    /// The returned root is joined with [`TemplateDescriptor::source`].
    fn template_override(&self, template: TemplateDescriptor) -> Option<PathBuf>;
}

/// Port for locating and loading extensions.
///
/// Implemented by:
/// - `simulix_adapters::extension::DescriptorExtensionLoader`
#[cfg_attr(test, mockall::automock)]
pub trait ExtensionLoader: Send + Sync {
    /// Load the extension at `location`.
    ///
    /// `Ok(None)` means there is no extension descriptor there, which is not
    /// an error. A descriptor that exists but cannot be loaded is an error.
    fn load(&self, location: &Path) -> SimulixResult<Option<Box<dyn Extension>>>;
}
