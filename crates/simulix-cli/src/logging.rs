//! Tracing subscriber for the `simulix` binary.
//!
//! Events always go to stderr so stdout stays reserved for results. With
//! `--output-format json` they are written as JSON lines too; otherwise a
//! compact human format is used. `RUST_LOG`, when set, replaces the filter
//! derived from `-v`/`-q`.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events pass the verbosity filter.
const WORKSPACE_TARGETS: [&str; 3] = ["simulix", "simulix_core", "simulix_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity(args))));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if args.output_format == OutputFormat::Json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(!args.no_color && io::stderr().is_terminal())
                    .with_writer(io::stderr),
            )
            .try_init()
    };
    installed.context("a tracing subscriber is already installed")
}

/// `-q` beats `-v`; no flag shows warnings.
fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    WORKSPACE_TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_follows_flag_count() {
        let levels: Vec<_> = (0..=4).map(|v| verbosity(&args(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(verbosity(&args(0, true)), LevelFilter::ERROR);
        assert_eq!(verbosity(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_every_workspace_crate() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "simulix=debug,simulix_core=debug,simulix_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_env_filter() {
        assert!(EnvFilter::try_new(filter_directives(LevelFilter::WARN)).is_ok());
    }
}
