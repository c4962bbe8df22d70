//! Naming Resolver - derives model metadata from an extracted archive layout.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        DomainError, Metadata, TopLevelRole, keys,
        naming::{classify, model_name_from_folder, short_model_name},
    },
    error::SimulixResult,
};

/// Fills `matlabVersion`, `folderName`, `modelName` and `modelNameS`.
///
/// The model container is "any top-level folder that is neither the version
/// tag nor `otherFiles`". When several folders qualify, the last one wins; a
/// warning is logged but the run continues.
pub struct NamingResolver {
    filesystem: Arc<dyn Filesystem>,
}

impl NamingResolver {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Resolve names from `top_level` entries extracted under `destination`.
    ///
    /// If no container folder exists the model keys stay unset, and the
    /// first template using them fails with `MissingKey`.
    pub fn resolve(
        &self,
        top_level: &[String],
        destination: &Path,
        metadata: &mut Metadata,
    ) -> SimulixResult<()> {
        for name in top_level {
            match classify(name) {
                TopLevelRole::VersionTag => {
                    debug!(version = %name, "Tool version tag found");
                    metadata.insert(keys::MATLAB_VERSION, name.as_str());
                }
                TopLevelRole::Reserved => {}
                TopLevelRole::Container => {
                    let generated = self.generated_folder(&destination.join(name))?;
                    let model_name = model_name_from_folder(&generated)?;

                    if let Some(previous) = metadata.insert(keys::FOLDER_NAME, name.as_str()) {
                        warn!(
                            previous = %previous,
                            current = %name,
                            "Several model folders in archive, using the last one"
                        );
                    }
                    debug!(folder = %name, model = %model_name, "Model folder found");
                    metadata.insert(keys::MODEL_NAME_SHORT, short_model_name(&model_name));
                    metadata.insert(keys::MODEL_NAME, model_name);
                }
            }
        }
        Ok(())
    }

    /// Name of the generated-code folder inside a model container.
    fn generated_folder(&self, container: &Path) -> SimulixResult<String> {
        if !self.filesystem.is_dir(container) {
            return Err(DomainError::NamingConventionMismatch {
                reason: format!("'{}' is not a directory", container.display()),
            }
            .into());
        }

        self.filesystem
            .list_dir(container)?
            .into_iter()
            .find(|child| self.filesystem.is_dir(&container.join(child)))
            .ok_or_else(|| {
                DomainError::NamingConventionMismatch {
                    reason: format!(
                        "'{}' contains no generated code folder",
                        container.display()
                    ),
                }
                .into()
            })
    }
}
