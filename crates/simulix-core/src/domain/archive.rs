//! Archive naming helpers.

use std::path::{Path, PathBuf};

/// Extension of code-generation archives.
pub const ZIP_EXTENSION: &str = "zip";

/// Extension of pre-built model packages.
pub const PACKAGE_EXTENSION: &str = "fmu";

/// Resolve an archive addressed as directory + name.
///
/// A name already ending in `.<extension>` is used as is, otherwise the
/// extension is appended: `default` → `default.zip`.
pub fn archive_file_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let has_extension = name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext == extension);
    if has_extension {
        dir.join(name)
    } else {
        dir.join(format!("{name}.{extension}"))
    }
}

/// Distinct top-level names of archive entries, in order of first appearance.
///
/// `proj/proj_model_grt_rtw/model.c` contributes `proj`. Leading `.`
/// segments are skipped; absolute entries and entries starting with `..`
/// contribute nothing.
pub fn top_level_names<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let first = entry.split(['/', '\\']).find(|s| *s != ".");
        let Some(first) = first.filter(|s| !s.is_empty() && *s != "..") else {
            continue;
        };
        if !names.iter().any(|n| n == first) {
            names.push(first.to_string());
        }
    }
    names
}

/// Model name of a package: its file stem.
pub fn package_model_name(package: &Path) -> Option<String> {
    package
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
