//! Implementation of the `simulix generate` command.
//!
//! Responsibility: resolve paths from flags and configuration, call the core
//! assembler, and display the report. No business logic lives here.

use tracing::{info, instrument};

use simulix_core::{
    application::GenerationRequest,
    domain::{ZIP_EXTENSION, archive_file_path},
};

use crate::{
    cli::GenerateArgs,
    commands::{ResolvedPaths, local_assembler, validate_archive_name},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `simulix generate` command.
#[instrument(skip_all, fields(archive = %args.name))]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    validate_archive_name(&args.name)?;
    let request = build_request(&args, config)?;

    output.header(&format!("Generating from {}", request.archive.display()))?;
    info!(destination = %request.destination.display(), "Generation started");

    let report = local_assembler().assemble(&request)?;

    output.report(&report, &request.destination)
}

fn build_request(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let paths = ResolvedPaths::resolve(&args.paths, config)?;
    Ok(GenerationRequest {
        archive: archive_file_path(&paths.archive_dir, &args.name, ZIP_EXTENSION),
        destination: paths.destination,
        template_root: paths.template_root,
        extension: args
            .extension
            .clone()
            .or_else(|| config.paths.extension.clone()),
    })
}
