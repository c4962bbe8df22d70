//! Extension Resolver - applies an optional extension to template rendering.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::ExtensionLoader,
        services::TemplateRenderer,
    },
    domain::{DEFAULT_CATALOG, Metadata},
    error::SimulixResult,
};

/// Result of [`ExtensionResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No extension at the given location; nothing was rendered.
    NotApplied,
    /// The extension was applied and the catalog rendered.
    Applied {
        extension: String,
        rendered: Vec<PathBuf>,
    },
}

impl Resolution {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Loads an extension, merges its metadata and renders the catalog with its
/// overrides.
///
/// Each catalog template falls back to the default independently, so an
/// extension may override any subset of them.
pub struct ExtensionResolver {
    loader: Box<dyn ExtensionLoader>,
    renderer: TemplateRenderer,
}

impl ExtensionResolver {
    pub fn new(loader: Box<dyn ExtensionLoader>, renderer: TemplateRenderer) -> Self {
        Self { loader, renderer }
    }

    #[instrument(skip_all, fields(extension = ?location.map(Path::display)))]
    pub fn resolve(
        &self,
        location: Option<&Path>,
        template_root: &Path,
        destination: &Path,
        metadata: &mut Metadata,
    ) -> SimulixResult<Resolution> {
        let Some(location) = location else {
            return Ok(Resolution::NotApplied);
        };
        let Some(extension) = self.loader.load(location)? else {
            debug!("No extension descriptor found");
            return Ok(Resolution::NotApplied);
        };
        let name = extension.name();

        if extension.supplies_metadata() {
            let supplied = extension.supply_metadata(metadata)?;
            let overridden = metadata.merge(supplied);
            if !overridden.is_empty() {
                info!(extension = %name, keys = ?overridden, "Extension overrides metadata");
            }
        }

        let mut rendered = Vec::with_capacity(DEFAULT_CATALOG.len());
        for template in DEFAULT_CATALOG {
            let source_root = match extension.template_override(template) {
                Some(root) => {
                    debug!(template = template.source(), root = %root.display(), "Using override");
                    root
                }
                None => template_root.to_path_buf(),
            };
            rendered.push(
                self.renderer
                    .render(&source_root, destination, template, metadata)?,
            );
        }

        info!(extension = %name, "Extension applied");
        Ok(Resolution::Applied {
            extension: name,
            rendered,
        })
    }
}
