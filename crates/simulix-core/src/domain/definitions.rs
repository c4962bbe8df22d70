//! Preprocessor definitions injected into the build configuration.

/// File name of the definitions manifest searched for in the workspace.
pub const MANIFEST_FILE_NAME: &str = "defines.txt";

/// Definition always emitted first, and appended to the manifest on use.
pub const SENTINEL_DEFINITION: &str = "SIMULIX";

/// Build the `add_definitions(...)` line for a manifest's content.
///
/// The sentinel comes first, then one `-D<name>` per manifest line in file
/// order. Blank lines and sentinel lines left by an earlier run are skipped.
pub fn definitions_directive(manifest: &str) -> String {
    let mut directive = format!("add_definitions(-D{SENTINEL_DEFINITION} ");
    for name in manifest
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && *line != SENTINEL_DEFINITION)
    {
        directive.push_str("-D");
        directive.push_str(name);
        directive.push(' ');
    }
    directive.push_str(")\n");
    directive
}

/// Put `directive` in front of the existing build configuration.
pub fn prepend_directive(directive: &str, build_config: &str) -> String {
    let mut out = String::with_capacity(directive.len() + build_config.len());
    out.push_str(directive);
    out.push_str(build_config);
    out
}
