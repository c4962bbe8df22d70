//! Zip extraction using the `zip` crate.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};

use simulix_core::{
    application::{ApplicationError, ports::ArchiveExtractor},
    error::{SimulixError, SimulixResult},
};
use tracing::{debug, warn};

/// Extracts zip archives (and model packages, which are zip files).
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl ZipExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> SimulixResult<Vec<String>> {
        let file = File::open(archive).map_err(|e| archive_error(archive, format!("Failed to open archive: {e}")))?;
        let mut zip = zip::ZipArchive::new(file)
            .map_err(|e| archive_error(archive, format!("Invalid or corrupt ZIP: {e}")))?;

        let mut names = Vec::with_capacity(zip.len());
        let mut written = 0usize;
        for i in 0..zip.len() {
            let mut entry = zip
                .by_index(i)
                .map_err(|e| archive_error(archive, format!("Failed to read entry {i}: {e}")))?;
            let Some(relative) = entry.enclosed_name() else {
                warn!(entry = entry.name(), "Skipping entry outside the destination");
                continue;
            };
            let output_path = destination.join(&relative);
            names.push(normalised_name(&relative));

            if entry.is_dir() {
                fs::create_dir_all(&output_path)
                    .map_err(|e| write_error(&output_path, e, "create directory"))?;
            } else {
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| write_error(parent, e, "create directory"))?;
                }
                let mut outfile = File::create(&output_path)
                    .map_err(|e| write_error(&output_path, e, "create file"))?;
                io::copy(&mut entry, &mut outfile)
                    .map_err(|e| write_error(&output_path, e, "write file"))?;
                written += 1;
            }
        }

        debug!(
            archive = %archive.display(),
            entries = names.len(),
            files = written,
            "Zip extracted"
        );
        Ok(names)
    }
}

/// `/`-separated form of an enclosed entry path with `.` and `..` resolved.
fn normalised_name(relative: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::ParentDir => {
                segments.pop();
            }
            _ => {}
        }
    }
    segments.join("/")
}

fn archive_error(archive: &Path, reason: String) -> SimulixError {
    ApplicationError::ArchiveError {
        path: archive.to_path_buf(),
        reason,
    }
    .into()
}

fn write_error(path: &Path, e: io::Error, operation: &str) -> SimulixError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
