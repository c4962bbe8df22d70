//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "simulix",
    bin_name = "simulix",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Turn model code-generation archives into buildable workspaces",
    long_about = "Simulix unpacks a model code-generation archive, derives the model \
                  name from its layout, renders the C and CMake templates and injects \
                  preprocessor definitions, producing a workspace ready to build.",
    after_help = "EXAMPLES:\n\
        \x20 simulix generate                       # ./default.zip into .\n\
        \x20 simulix generate pump -p build -t /opt/simulix\n\
        \x20 simulix generate pump -e ./acme-extension\n\
        \x20 simulix package Pump --zip-path ./fmus\n\
        \x20 simulix completions bash > /usr/share/bash-completion/completions/simulix",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a workspace from a code-generation archive.
    #[command(
        visible_alias = "g",
        about = "Generate a workspace from a code-generation archive",
        after_help = "EXAMPLES:\n\
            \x20 simulix generate\n\
            \x20 simulix generate my_model.zip -p ./build\n\
            \x20 simulix generate my_model --zip-path ./archives -e ./acme-extension"
    )]
    Generate(GenerateArgs),

    /// Generate a workspace from a model package.
    #[command(
        visible_alias = "p",
        about = "Generate a workspace from an FMU package",
        after_help = "EXAMPLES:\n\
            \x20 simulix package Pump\n\
            \x20 simulix package Pump.fmu -p ./build --zip-path ./fmus"
    )]
    Package(PackageArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 simulix completions bash > ~/.local/share/bash-completion/completions/simulix\n\
            \x20 simulix completions zsh  > ~/.zfunc/_simulix\n\
            \x20 simulix completions fish > ~/.config/fish/completions/simulix.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Simulix configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 simulix config get paths.templates\n\
            \x20 simulix config list\n\
            \x20 simulix config path"
    )]
    Config(ConfigCommands),
}

// ── shared paths ──────────────────────────────────────────────────────────────

/// Locations shared by `generate` and `package`.
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Workspace directory.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Destination directory (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Template root.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Directory holding templates/, includes/ and libraryincludes/"
    )]
    pub templates: Option<PathBuf>,

    /// Archive directory.
    #[arg(
        long = "zip-path",
        value_name = "DIR",
        help = "Directory containing the archive (default: current directory)"
    )]
    pub zip_path: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `simulix generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Archive name, with or without `.zip`.
    #[arg(value_name = "NAME", default_value = "default", help = "Archive name")]
    pub name: String,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Extension directory.
    #[arg(
        short = 'e',
        long = "extension",
        value_name = "DIR",
        help = "Extension directory overriding templates and metadata"
    )]
    pub extension: Option<PathBuf>,
}

// ── package ───────────────────────────────────────────────────────────────────

/// Arguments for `simulix package`.
#[derive(Debug, Args)]
pub struct PackageArgs {
    /// Package name, with or without `.fmu`.
    #[arg(value_name = "NAME", default_value = "default", help = "FMU name")]
    pub name: String,

    #[command(flatten)]
    pub paths: PathArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `simulix completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `simulix config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.templates`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
