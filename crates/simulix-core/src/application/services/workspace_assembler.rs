//! Workspace Assembler - orchestrates a complete generation run.
//!
//! A run is a fixed sequence of steps, each fatal on error:
//!
//! 1. check the archive exists
//! 2. extract it and resolve names
//! 3. copy support directories from the template root
//! 4. render templates (extension overrides or defaults)
//! 5. inject preprocessor definitions
//!
//! Nothing is rolled back on failure. Rerunning into a cleared destination is
//! the recovery path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ArchiveExtractor, ExtensionLoader, Filesystem},
        services::{
            ArchiveIngester, DefinitionInjector, ExtensionResolver, Resolution, TemplateRenderer,
        },
    },
    domain::{DEFAULT_CATALOG, Metadata, TemplateDescriptor, keys},
    error::SimulixResult,
};

/// Directories copied verbatim from the template root into the workspace.
pub const SUPPORT_DIRECTORIES: [&str; 2] = ["includes", "libraryincludes"];

/// Input for [`WorkspaceAssembler::assemble`].
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Workspace root, created if absent.
    pub destination: PathBuf,
    /// Directory holding `templates/`, `includes/` and `libraryincludes/`.
    pub template_root: PathBuf,
    /// Code-generation archive.
    pub archive: PathBuf,
    /// Optional extension directory.
    pub extension: Option<PathBuf>,
}

/// Input for [`WorkspaceAssembler::assemble_package`].
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub destination: PathBuf,
    pub template_root: PathBuf,
    /// Model package (`.fmu`).
    pub package: PathBuf,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Final metadata, after extension overrides.
    pub metadata: Metadata,
    /// Rendered files, in rendering order.
    pub rendered: Vec<PathBuf>,
    /// Name of the applied extension.
    pub extension: Option<String>,
    /// Manifest the definitions were taken from.
    pub definitions: Option<PathBuf>,
}

pub struct WorkspaceAssembler {
    filesystem: Arc<dyn Filesystem>,
    ingester: ArchiveIngester,
    renderer: TemplateRenderer,
    extensions: ExtensionResolver,
    definitions: DefinitionInjector,
}

impl WorkspaceAssembler {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        extractor: Arc<dyn ArchiveExtractor>,
        loader: Box<dyn ExtensionLoader>,
    ) -> Self {
        let renderer = TemplateRenderer::new(Arc::clone(&filesystem));
        Self {
            ingester: ArchiveIngester::new(Arc::clone(&filesystem), extractor),
            extensions: ExtensionResolver::new(loader, renderer.clone()),
            definitions: DefinitionInjector::new(Arc::clone(&filesystem)),
            renderer,
            filesystem,
        }
    }

    /// Build a workspace from a code-generation archive.
    #[instrument(skip_all, fields(
        archive = %request.archive.display(),
        destination = %request.destination.display(),
    ))]
    pub fn assemble(&self, request: &GenerationRequest) -> SimulixResult<GenerationReport> {
        self.ensure_exists(&request.archive)?;

        let mut metadata = Self::seeded_metadata(&request.template_root);
        self.ingester
            .ingest(&request.destination, &request.archive, &mut metadata)?;

        for dir in SUPPORT_DIRECTORIES {
            self.filesystem.copy_dir_all(
                &request.template_root.join(dir),
                &request.destination.join(dir),
            )?;
        }

        let (extension, rendered) = match self.extensions.resolve(
            request.extension.as_deref(),
            &request.template_root,
            &request.destination,
            &mut metadata,
        )? {
            Resolution::Applied {
                extension,
                rendered,
            } => (Some(extension), rendered),
            Resolution::NotApplied => {
                let rendered = self.renderer.render_all(
                    &request.template_root,
                    &request.destination,
                    &DEFAULT_CATALOG,
                    &metadata,
                )?;
                (None, rendered)
            }
        };

        let definitions = self.definitions.inject(&request.destination)?;

        info!(
            model = metadata.get(keys::MODEL_NAME).unwrap_or_default(),
            files = rendered.len(),
            "Workspace assembled"
        );
        Ok(GenerationReport {
            metadata,
            rendered,
            extension,
            definitions,
        })
    }

    /// Build a workspace from a model package.
    ///
    /// Only the package build configuration is rendered; support directories,
    /// extensions and definitions do not apply.
    #[instrument(skip_all, fields(
        package = %request.package.display(),
        destination = %request.destination.display(),
    ))]
    pub fn assemble_package(&self, request: &PackageRequest) -> SimulixResult<GenerationReport> {
        self.ensure_exists(&request.package)?;

        let mut metadata = Self::seeded_metadata(&request.template_root);
        self.ingester
            .ingest_package(&request.destination, &request.package, &mut metadata)?;

        let rendered = self.renderer.render(
            &request.template_root,
            &request.destination,
            TemplateDescriptor::PACKAGE_BUILD_CONFIG,
            &metadata,
        )?;

        info!(
            model = metadata.get(keys::MODEL_NAME).unwrap_or_default(),
            "Package workspace assembled"
        );
        Ok(GenerationReport {
            metadata,
            rendered: vec![rendered],
            extension: None,
            definitions: None,
        })
    }

    fn ensure_exists(&self, archive: &Path) -> SimulixResult<()> {
        if self.filesystem.is_file(archive) {
            Ok(())
        } else {
            Err(ApplicationError::ArchiveNotFound {
                path: archive.to_path_buf(),
            }
            .into())
        }
    }

    fn seeded_metadata(template_root: &Path) -> Metadata {
        let base = template_root.to_string_lossy().replace('\\', "/");
        Metadata::new().with(keys::BASE_PATH, base)
    }
}
