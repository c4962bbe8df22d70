//! `simulix`: turns model code-generation archives into buildable workspaces.
//!
//! Exit status: 0 on success, 1 internal failure, 2 bad usage or a malformed
//! archive or template, 3 missing archive, 4 bad configuration or extension.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return clap_exit(&e),
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("simulix: {e:#}");
        return ExitCode::FAILURE;
    }
    debug!(?cli.global, "Arguments parsed");

    let verbose = cli.global.verbose > 0;
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let output = OutputManager::new(&cli.global, &AppConfig::default());
            return fail(&output, CliError::from(e), verbose);
        }
    };
    let output = OutputManager::new(&cli.global, &config);

    match run(cli.command, &config, &output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&output, e, verbose),
    }
}

/// Help and version go to stdout with status 0; real parse errors to stderr
/// with status 2.
fn clap_exit(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    u8::try_from(e.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn run(command: Commands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Package(args) => commands::package::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

fn fail(output: &OutputManager, err: CliError, verbose: bool) -> ExitCode {
    err.log();
    output.error(&err, verbose);
    err.status().into()
}
