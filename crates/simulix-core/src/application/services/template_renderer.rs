//! Template Renderer - renders catalog templates into the workspace.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{Metadata, TemplateDescriptor, render_template},
    error::SimulixResult,
};

/// Renders one template file at a time.
///
/// The whole output is produced in memory before anything is written, so a
/// [`DomainError::MissingKey`](crate::domain::DomainError::MissingKey) never
/// leaves a half-rendered file in the workspace.
#[derive(Clone)]
pub struct TemplateRenderer {
    filesystem: Arc<dyn Filesystem>,
}

impl TemplateRenderer {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render `template` from `source_root` into `destination`.
    ///
    /// Returns the written path. An existing file is overwritten.
    #[instrument(skip_all, fields(template = template.source()))]
    pub fn render(
        &self,
        source_root: &Path,
        destination: &Path,
        template: TemplateDescriptor,
        metadata: &Metadata,
    ) -> SimulixResult<PathBuf> {
        let source_path = template.source_path(source_root);
        let source = self.filesystem.read_to_string(&source_path)?;
        let rendered = render_template(template.file_name(), &source, metadata)?;

        let output = template.output_path(destination);
        if let Some(parent) = output.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&output, &rendered)?;

        debug!(
            from = %source_path.display(),
            to = %output.display(),
            "Template rendered"
        );
        Ok(output)
    }

    /// Render several templates from the same root, stopping at the first error.
    pub fn render_all(
        &self,
        source_root: &Path,
        destination: &Path,
        templates: &[TemplateDescriptor],
        metadata: &Metadata,
    ) -> SimulixResult<Vec<PathBuf>> {
        templates
            .iter()
            .map(|t| self.render(source_root, destination, *t, metadata))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{DomainError, keys},
        error::SimulixError,
    };

    #[test]
    fn renders_into_destination() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/tpl/templates/exemain_template.c"))
            .returning(|_| Ok("#include \"{modelName}.h\"".into()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/out/exemain.c") && content == "#include \"proj_model.h\""
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let renderer = TemplateRenderer::new(Arc::new(fs));
        let md = Metadata::new().with(keys::MODEL_NAME, "proj_model");
        let out = renderer
            .render(
                Path::new("/tpl"),
                Path::new("/out"),
                TemplateDescriptor::ENTRY_POINT,
                &md,
            )
            .unwrap();

        assert_eq!(out, Path::new("/out/exemain.c"));
    }

    #[test]
    fn missing_key_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("{folderName}".into()));
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let renderer = TemplateRenderer::new(Arc::new(fs));
        let err = renderer
            .render(
                Path::new("/tpl"),
                Path::new("/out"),
                TemplateDescriptor::BUILD_CONFIG,
                &Metadata::new(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            SimulixError::Domain(DomainError::MissingKey { ref key, .. }) if key == "folderName"
        ));
    }
}
