//! Command handlers. One module per subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use simulix_adapters::{DescriptorExtensionLoader, LocalFilesystem, ZipExtractor};
use simulix_core::application::WorkspaceAssembler;
use tracing::debug;

use crate::{
    cli::PathArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

pub mod completions;
pub mod config;
pub mod generate;
pub mod package;

/// Locations after applying flags, then configuration, then fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub destination: PathBuf,
    pub template_root: PathBuf,
    pub archive_dir: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(args: &PathArgs, config: &AppConfig) -> CliResult<Self> {
        let cwd = || std::env::current_dir().with_cli_context(|| "reading current directory");

        let destination = match &args.path {
            Some(path) => path.clone(),
            None => cwd()?,
        };
        let template_root = match args.templates.as_ref().or(config.paths.templates.as_ref()) {
            Some(path) => path.clone(),
            None => executable_dir()?,
        };
        let archive_dir = match args.zip_path.as_ref().or(config.paths.archive_dir.as_ref()) {
            Some(path) => path.clone(),
            None => cwd()?,
        };

        debug!(
            destination = %destination.display(),
            templates = %template_root.display(),
            archives = %archive_dir.display(),
            "Paths resolved"
        );
        Ok(Self {
            destination,
            template_root,
            archive_dir,
        })
    }
}

/// Reject names that cannot address a file.
pub fn validate_archive_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "archive name must not be empty".into(),
        });
    }
    Ok(())
}

/// Assembler wired to the local filesystem.
pub fn local_assembler() -> WorkspaceAssembler {
    let filesystem = Arc::new(LocalFilesystem::new());
    WorkspaceAssembler::new(
        filesystem.clone(),
        Arc::new(ZipExtractor::new()),
        Box::new(DescriptorExtensionLoader::new(filesystem)),
    )
}

fn executable_dir() -> CliResult<PathBuf> {
    let exe = std::env::current_exe().with_cli_context(|| "locating the simulix executable")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "cannot derive a template root from {}; pass --templates",
                exe.display()
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: Option<&str>, templates: Option<&str>, zip_path: Option<&str>) -> PathArgs {
        PathArgs {
            path: path.map(PathBuf::from),
            templates: templates.map(PathBuf::from),
            zip_path: zip_path.map(PathBuf::from),
        }
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = AppConfig::default();
        config.paths.templates = Some(PathBuf::from("/config/templates"));
        config.paths.archive_dir = Some(PathBuf::from("/config/archives"));

        let resolved =
            ResolvedPaths::resolve(&args(Some("out"), Some("/flag/templates"), None), &config)
                .unwrap();

        assert_eq!(resolved.destination, PathBuf::from("out"));
        assert_eq!(resolved.template_root, PathBuf::from("/flag/templates"));
        assert_eq!(resolved.archive_dir, PathBuf::from("/config/archives"));
    }

    #[test]
    fn fallbacks_use_cwd_and_executable() {
        let resolved = ResolvedPaths::resolve(&args(None, None, None), &AppConfig::default())
            .unwrap();

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolved.destination, cwd);
        assert_eq!(resolved.archive_dir, cwd);
        assert!(resolved.template_root.is_dir());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_archive_name("  ").is_err());
        assert!(validate_archive_name("default").is_ok());
    }
}
