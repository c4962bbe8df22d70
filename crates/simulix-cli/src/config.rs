//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SIMULIX_PATHS__TEMPLATES=/opt/simulix`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SIMULIX";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default locations.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `templates/`, `includes/` and `libraryincludes/`.
    /// Falls back to the directory of the executable.
    pub templates: Option<PathBuf>,
    /// Directory searched for archives. Falls back to the current directory.
    pub archive_dir: Option<PathBuf>,
    /// Extension applied when `--extension` is not given.
    pub extension: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. The
    /// default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (file, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(file = %file.display(), required, "Loading configuration");

        Self::load_from(&file, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(file: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(file).format(FileFormat::Toml).required(required))
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", file.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.simulix.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "simulix", "simulix")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".simulix.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Environment source that never reads the process environment.
    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_have_no_paths() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths, PathsConfig::default());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("none.toml"), false, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("none.toml"), true, env(&[])).is_err());
    }

    #[test]
    fn file_values_are_read() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(
            &file,
            "[paths]\ntemplates = \"/opt/simulix\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&file, true, env(&[])).unwrap();

        assert_eq!(cfg.paths.templates, Some(PathBuf::from("/opt/simulix")));
        assert_eq!(cfg.paths.archive_dir, None);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "[paths]\narchive_dir = \"/from/file\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &file,
            true,
            env(&[("SIMULIX_PATHS__ARCHIVE_DIR", "/from/env")]),
        )
        .unwrap();

        assert_eq!(cfg.paths.archive_dir, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
