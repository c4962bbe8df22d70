//! Everything the binary writes for the user.
//!
//! Status lines go to stdout unless `--quiet` is given. With
//! `--output-format json` stdout carries exactly one JSON document. Status
//! lines are dropped and errors are written to stderr as JSON.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use simulix_core::{application::GenerationReport, domain::keys};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    /// Colour on stdout status lines.
    color: bool,
    /// `--no-color`, `NO_COLOR` or `output.no_color`.
    color_disabled: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };
        let color_disabled = args.no_color || config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !color_disabled,
            color_disabled,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Whether stdout is reserved for a single JSON document.
    pub fn wants_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn silent(&self) -> bool {
        self.quiet || self.wants_json()
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.stdout.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status_line("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status_line("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.stdout.write_line(&line)
    }

    fn status_line(&self, marker: &str, msg: &str, paint: fn(&str) -> String) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let marker = if self.color {
            paint(marker)
        } else {
            marker.to_owned()
        };
        self.stdout.write_line(&format!("{marker} {msg}"))
    }

    /// Pretty JSON on stdout, regardless of `--quiet`.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        self.stdout.write_line(&serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    /// The outcome of a generation run: JSON, or a summary with paths
    /// relative to `destination`.
    pub fn report(&self, report: &GenerationReport, destination: &Path) -> CliResult<()> {
        if self.wants_json() {
            return self.json(report);
        }

        let model = report.metadata.get(keys::MODEL_NAME).unwrap_or("<unknown>");
        self.success(&format!(
            "Workspace for {model} generated in {}",
            destination.display()
        ))?;
        if let Some(extension) = &report.extension {
            self.info(&format!("Extension applied: {extension}"))?;
        }
        for path in &report.rendered {
            let shown = path.strip_prefix(destination).unwrap_or(path);
            self.print(&format!("  {}", shown.display()))?;
        }
        if let Some(manifest) = &report.definitions {
            self.info(&format!("Definitions taken from {}", manifest.display()))?;
        }
        Ok(())
    }

    /// Report a failed run on stderr. Never suppressed by `--quiet`.
    pub fn error(&self, err: &CliError, verbose: bool) {
        let written = if self.wants_json() {
            self.stderr.write_line(&err.to_json().to_string())
        } else {
            let color = !self.color_disabled && io::stderr().is_terminal();
            self.stderr.write_str(&err.render(verbose, color))
        };
        // Nothing sensible is left to do if stderr itself is gone.
        let _ = written;
    }
}
