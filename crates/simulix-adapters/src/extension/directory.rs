//! An extension backed by a directory on disk.

use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::Arc,
};

use simulix_core::{
    application::{
        ApplicationError,
        ports::{Extension, Filesystem},
    },
    domain::{Metadata, TemplateDescriptor, render_template},
    error::{SimulixError, SimulixResult},
};

use super::DESCRIPTOR_FILE;

pub struct DirectoryExtension {
    name: String,
    root: PathBuf,
    template_info: BTreeMap<String, String>,
    filesystem: Arc<dyn Filesystem>,
}

impl DirectoryExtension {
    pub fn new(
        name: String,
        root: PathBuf,
        template_info: BTreeMap<String, String>,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            name,
            root,
            template_info,
            filesystem,
        }
    }
}

impl Extension for DirectoryExtension {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn supplies_metadata(&self) -> bool {
        !self.template_info.is_empty()
    }

    fn supply_metadata(&self, current: &Metadata) -> SimulixResult<Metadata> {
        self.template_info
            .iter()
            .map(|(key, value)| {
                render_template(key, value, current)
                    .map(|rendered| (key.clone(), rendered))
                    .map_err(|e| {
                        SimulixError::from(ApplicationError::ExtensionLoad {
                            path: self.root.join(DESCRIPTOR_FILE),
                            reason: format!("template_info.{key}: {e}"),
                        })
                    })
            })
            .collect()
    }

    fn template_override(&self, template: TemplateDescriptor) -> Option<PathBuf> {
        self.filesystem
            .is_file(&template.source_path(&self.root))
            .then(|| self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use simulix_core::domain::keys;

    fn extension(fs: &MemoryFilesystem, info: &[(&str, &str)]) -> DirectoryExtension {
        DirectoryExtension::new(
            "acme".into(),
            PathBuf::from("/ext"),
            info.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            Arc::new(fs.clone()),
        )
    }

    #[test]
    fn overrides_only_present_templates() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/ext/templates/CMakeLists_template.txt", "custom");
        let ext = extension(&fs, &[]);

        assert_eq!(
            ext.template_override(TemplateDescriptor::BUILD_CONFIG),
            Some(PathBuf::from("/ext"))
        );
        assert_eq!(ext.template_override(TemplateDescriptor::ENTRY_POINT), None);
        assert_eq!(ext.template_override(TemplateDescriptor::UTILITIES), None);
    }

    #[test]
    fn metadata_values_are_rendered() {
        let fs = MemoryFilesystem::new();
        let ext = extension(&fs, &[("targetName", "{modelName}_acme")]);
        let current = Metadata::new().with(keys::MODEL_NAME, "proj_model");

        let supplied = ext.supply_metadata(&current).unwrap();

        assert!(ext.supplies_metadata());
        assert_eq!(supplied.get("targetName"), Some("proj_model_acme"));
        assert_eq!(supplied.len(), 1);
    }

    #[test]
    fn unknown_key_in_metadata_is_load_error() {
        let fs = MemoryFilesystem::new();
        let ext = extension(&fs, &[("targetName", "{nope}")]);

        let err = ext.supply_metadata(&Metadata::new()).unwrap_err();

        assert!(matches!(
            err,
            SimulixError::Application(ApplicationError::ExtensionLoad { ref reason, .. })
                if reason.starts_with("template_info.targetName")
        ));
    }
}
