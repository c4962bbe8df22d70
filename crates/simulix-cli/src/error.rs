//! Errors surfaced by the `simulix` binary and how they reach the user.
//!
//! Each error maps to an [`ExitStatus`] and a list of hints. [`CliError::render`]
//! writes the human form and [`CliError::to_json`] the machine form used with
//! `--output-format json`.

use std::error::Error;
use std::fmt::Write as _;
use std::process::ExitCode;

use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use thiserror::Error;

use simulix_core::error::{ErrorCategory, SimulixError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Unreadable config file, unknown key, or unserialisable config.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Failure inside generation. Its own message is shown unchanged.
    #[error(transparent)]
    Core(#[from] SimulixError),

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialise output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Process exit status for a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ExitStatus {
    Internal = 1,
    Usage = 2,
    NotFound = 3,
    Configuration = 4,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        CliError::Io {
            message: source.to_string(),
            source,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Config {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    pub fn status(&self) -> ExitStatus {
        match self {
            Self::InvalidInput { .. } => ExitStatus::Usage,
            Self::Config { .. } => ExitStatus::Configuration,
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation | ErrorCategory::Template => ExitStatus::Usage,
                ErrorCategory::NotFound => ExitStatus::NotFound,
                ErrorCategory::Configuration => ExitStatus::Configuration,
                ErrorCategory::Internal => ExitStatus::Internal,
            },
            Self::Io { .. } | Self::Serialization(_) => ExitStatus::Internal,
        }
    }

    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run `simulix help` for usage".into()],
            Self::Config { .. } => vec![
                "Inspect the effective configuration with `simulix config list`".into(),
                format!(
                    "Environment variables use the form {}_PATHS__TEMPLATES",
                    crate::config::ENV_PREFIX
                ),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { .. } => vec!["Check that the path exists and is writable".into()],
            Self::Serialization(_) => vec!["Retry without --output-format json".into()],
        }
    }

    /// Causes below the top-level message, outermost first.
    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(err) = next {
            causes.push(err.to_string());
            next = err.source();
        }
        causes
    }

    /// Multi-line report for stderr.
    ///
    /// Causes are listed only when `verbose`; otherwise a note says they exist.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = String::new();
        let _ = writeln!(out, "{} {self}", paint("error:", Style::new().red().bold()));

        let causes = self.causes();
        if verbose {
            for cause in &causes {
                let _ = writeln!(out, "  {} {cause}", paint("caused by:", Style::new().dimmed()));
            }
        }
        for hint in self.hints() {
            let _ = writeln!(out, "{} {hint}", paint("hint:", Style::new().yellow().bold()));
        }
        if !verbose && !causes.is_empty() {
            let _ = writeln!(out, "{}", paint("rerun with -v to see the causes", Style::new().dimmed()));
        }
        out
    }

    /// Machine-readable form: message, exit status, causes and hints.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "status": self.status(),
            "exit_code": self.status() as u8,
            "causes": self.causes(),
            "hints": self.hints(),
        })
    }

    pub fn log(&self) {
        match self.status() {
            ExitStatus::Usage | ExitStatus::NotFound => tracing::warn!(error = %self, "Run aborted"),
            ExitStatus::Configuration | ExitStatus::Internal => {
                tracing::error!(error = %self, "Run aborted")
            }
        }
    }
}

/// Attach a description to an `io::Error` while converting it.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::Io {
            message: f().into(),
            source,
        })
    }
}
