//! Archive Ingester - extracts archives and derives metadata from them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ArchiveExtractor, Filesystem},
        services::NamingResolver,
    },
    domain::{Metadata, ZIP_EXTENSION, archive::package_model_name, keys, top_level_names},
    error::SimulixResult,
};

/// Extracts archives into the workspace and fills the metadata mapping.
///
/// Existence of the archive is checked by the caller before ingestion.
pub struct ArchiveIngester {
    filesystem: Arc<dyn Filesystem>,
    extractor: Arc<dyn ArchiveExtractor>,
    naming: NamingResolver,
}

impl ArchiveIngester {
    pub fn new(filesystem: Arc<dyn Filesystem>, extractor: Arc<dyn ArchiveExtractor>) -> Self {
        Self {
            naming: NamingResolver::new(Arc::clone(&filesystem)),
            filesystem,
            extractor,
        }
    }

    /// Extract a code-generation archive into `destination` and resolve names
    /// from its top-level layout.
    #[instrument(skip_all, fields(archive = %archive.display()))]
    pub fn ingest(
        &self,
        destination: &Path,
        archive: &Path,
        metadata: &mut Metadata,
    ) -> SimulixResult<()> {
        self.filesystem.create_dir_all(destination)?;
        let entries = self.extractor.extract(archive, destination)?;
        let top_level = top_level_names(entries.iter().map(String::as_str));
        info!(
            entries = entries.len(),
            top_level = ?top_level,
            "Archive extracted"
        );

        self.naming.resolve(&top_level, destination, metadata)
    }

    /// Extract a model package into `destination/<model name>`.
    ///
    /// The model name is the package's file stem. The package is first copied
    /// next to itself with a `.zip` extension, and the copy is extracted.
    /// Returns the extraction directory.
    #[instrument(skip_all, fields(package = %package.display()))]
    pub fn ingest_package(
        &self,
        destination: &Path,
        package: &Path,
        metadata: &mut Metadata,
    ) -> SimulixResult<PathBuf> {
        let model_name =
            package_model_name(package).ok_or_else(|| ApplicationError::ArchiveError {
                path: package.to_path_buf(),
                reason: "package file name has no usable stem".into(),
            })?;
        metadata.insert(keys::MODEL_NAME, model_name.as_str());

        let zip_copy = package.with_extension(ZIP_EXTENSION);
        self.filesystem.copy_file(package, &zip_copy)?;

        let target = destination.join(&model_name);
        self.filesystem.create_dir_all(&target)?;
        let entries = self.extractor.extract(&zip_copy, &target)?;
        info!(
            model = %model_name,
            entries = entries.len(),
            "Package extracted"
        );

        Ok(target)
    }
}
