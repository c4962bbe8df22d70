//! Descriptor parsing and extension loading.

use std::{
    collections::BTreeMap,
    path::Path,
    sync::Arc,
};

use serde::Deserialize;
use tracing::{debug, instrument};

use simulix_core::{
    application::{
        ApplicationError,
        ports::{Extension, ExtensionLoader, Filesystem},
    },
    error::SimulixResult,
};

use super::DirectoryExtension;

/// File name that marks a directory as an extension.
pub const DESCRIPTOR_FILE: &str = "extension.toml";

/// Deserialised representation of an `extension.toml` file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionDescriptor {
    #[serde(default)]
    pub extension: ExtensionSection,
    /// Metadata templates keyed by metadata key.
    #[serde(default)]
    pub template_info: BTreeMap<String, String>,
}

/// `[extension]` section.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionSection {
    pub name: Option<String>,
}

impl ExtensionDescriptor {
    /// Parse descriptor text. `path` is only used in the error.
    pub fn parse(path: &Path, text: &str) -> SimulixResult<Self> {
        toml::from_str(text).map_err(|e| {
            ApplicationError::ExtensionLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Loads [`DirectoryExtension`]s through the filesystem port.
pub struct DescriptorExtensionLoader {
    filesystem: Arc<dyn Filesystem>,
}

impl DescriptorExtensionLoader {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }
}

impl ExtensionLoader for DescriptorExtensionLoader {
    #[instrument(skip(self), fields(location = %location.display()))]
    fn load(&self, location: &Path) -> SimulixResult<Option<Box<dyn Extension>>> {
        let descriptor_path = location.join(DESCRIPTOR_FILE);
        if !self.filesystem.is_file(&descriptor_path) {
            debug!("No extension descriptor");
            return Ok(None);
        }

        let text = self.filesystem.read_to_string(&descriptor_path)?;
        let descriptor = ExtensionDescriptor::parse(&descriptor_path, &text)?;
        let name = descriptor
            .extension
            .name
            .clone()
            .unwrap_or_else(|| directory_name(location));

        debug!(
            name = %name,
            metadata_keys = descriptor.template_info.len(),
            "Extension descriptor loaded"
        );
        Ok(Some(Box::new(DirectoryExtension::new(
            name,
            location.to_path_buf(),
            descriptor.template_info,
            Arc::clone(&self.filesystem),
        ))))
    }
}

fn directory_name(location: &Path) -> String {
    location
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.display().to_string())
}
