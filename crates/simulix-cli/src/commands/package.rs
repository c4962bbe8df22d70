//! Implementation of the `simulix package` command.

use tracing::instrument;

use simulix_core::{
    application::PackageRequest,
    domain::{PACKAGE_EXTENSION, archive_file_path},
};

use crate::{
    cli::PackageArgs,
    commands::{ResolvedPaths, local_assembler, validate_archive_name},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `simulix package` command.
#[instrument(skip_all, fields(package = %args.name))]
pub fn execute(args: PackageArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    validate_archive_name(&args.name)?;
    let paths = ResolvedPaths::resolve(&args.paths, config)?;
    let request = PackageRequest {
        package: archive_file_path(&paths.archive_dir, &args.name, PACKAGE_EXTENSION),
        destination: paths.destination,
        template_root: paths.template_root,
    };

    output.header(&format!("Repackaging {}", request.package.display()))?;
    let report = local_assembler().assemble_package(&request)?;

    output.report(&report, &request.destination)
}
