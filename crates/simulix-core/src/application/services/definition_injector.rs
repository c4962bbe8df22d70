//! Definition Injector - prepends preprocessor definitions to the build config.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        MANIFEST_FILE_NAME, SENTINEL_DEFINITION, TemplateDescriptor,
        definitions::{definitions_directive, prepend_directive},
    },
    error::SimulixResult,
};

pub struct DefinitionInjector {
    filesystem: Arc<dyn Filesystem>,
}

impl DefinitionInjector {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Inject the definitions manifest found under `destination`, if any.
    ///
    /// Returns the manifest path that was used. The manifest gets the
    /// sentinel appended, then the rendered `CMakeLists.txt` is replaced in
    /// one atomic write.
    #[instrument(skip_all, fields(destination = %destination.display()))]
    pub fn inject(&self, destination: &Path) -> SimulixResult<Option<PathBuf>> {
        let Some(manifest) = self.filesystem.find_file(destination, MANIFEST_FILE_NAME)? else {
            debug!("No definitions manifest");
            return Ok(None);
        };

        let names = self.filesystem.read_to_string(&manifest)?;
        self.filesystem.append_line(&manifest, SENTINEL_DEFINITION)?;

        let directive = definitions_directive(&names);
        let build_config = TemplateDescriptor::BUILD_CONFIG.output_path(destination);
        let original = self.filesystem.read_to_string(&build_config)?;
        self.filesystem
            .write_file(&build_config, &prepend_directive(&directive, &original))?;

        info!(
            manifest = %manifest.display(),
            directive = directive.trim_end(),
            "Definitions injected"
        );
        Ok(Some(manifest))
    }
}
