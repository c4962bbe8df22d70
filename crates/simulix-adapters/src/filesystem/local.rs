//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use simulix_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SimulixError, SimulixResult},
};
use tracing::debug;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SimulixResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> SimulixResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SimulixResult<()> {
        // The temp file must live on the same filesystem for the rename to be atomic.
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        // Replacements keep the old file's mode; new files get the usual
        // umask-filtered default instead of the temp file's 0600.
        let existing = fs::metadata(path).ok().map(|m| m.permissions());
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        if existing.is_none() {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder
            .tempfile_in(parent)
            .map_err(|e| map_io_error(path, e, "create temp file"))?;
        if let Some(permissions) = existing {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        tmp.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }

    fn append_line(&self, path: &Path, line: &str) -> SimulixResult<()> {
        let existing = self.read_to_string(path)?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file"))?;

        let mut chunk = String::with_capacity(line.len() + 2);
        if !existing.is_empty() && !existing.ends_with('\n') {
            chunk.push('\n');
        }
        chunk.push_str(line);
        chunk.push('\n');
        file.write_all(chunk.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> SimulixResult<()> {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> SimulixResult<()> {
        fs::create_dir_all(to).map_err(|e| map_io_error(to, e, "create directory"))?;

        let mut copied = 0usize;
        for entry in WalkDir::new(from).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(from).to_path_buf();
                map_io_error(&path, e.into(), "walk directory")
            })?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| SimulixError::Internal {
                    message: format!("walked outside {}: {e}", from.display()),
                })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(entry.path(), e, "copy file"))?;
                copied += 1;
            }
        }

        debug!(from = %from.display(), to = %to.display(), files = copied, "Directory copied");
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> SimulixResult<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn find_file(&self, root: &Path, file_name: &str) -> SimulixResult<Option<PathBuf>> {
        Ok(WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .find(|e| e.file_type().is_file() && e.file_name() == file_name)
            .map(walkdir::DirEntry::into_path))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SimulixError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("CMakeLists.txt");
        fs::write(&file, "old").unwrap();

        LocalFilesystem::new().write_file(&file, "new").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "new");
        // No temp file left next to it.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let reference = dir.path().join("reference.c");
        fs::write(&reference, "").unwrap();
        let file = dir.path().join("exemain.c");

        LocalFilesystem::new().write_file(&file, "int x;").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&file), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn replacement_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("CMakeLists.txt");
        fs::write(&file, "old").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o640)).unwrap();

        LocalFilesystem::new().write_file(&file, "new").unwrap();

        assert_eq!(fs::metadata(&file).unwrap().permissions().mode() & 0o777, 0o640);
    }

    #[test]
    fn append_line_adds_missing_newline() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("defines.txt");
        fs::write(&file, "FOO\nBAR").unwrap();

        LocalFilesystem::new().append_line(&file, "SIMULIX").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "FOO\nBAR\nSIMULIX\n");
    }

    #[test]
    fn copy_dir_all_merges_into_existing() {
        let src = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("sub")).unwrap();
        fs::write(src.path().join("a.h"), "a").unwrap();
        fs::write(src.path().join("sub/b.h"), "b").unwrap();

        let dst = TempDir::new().unwrap();
        fs::write(dst.path().join("a.h"), "stale").unwrap();
        fs::write(dst.path().join("keep.h"), "keep").unwrap();

        LocalFilesystem::new()
            .copy_dir_all(src.path(), dst.path())
            .unwrap();

        assert_eq!(fs::read_to_string(dst.path().join("a.h")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dst.path().join("sub/b.h")).unwrap(), "b");
        assert!(dst.path().join("keep.h").exists());
    }

    #[test]
    fn copy_dir_all_missing_source_fails() {
        let dst = TempDir::new().unwrap();
        let result = LocalFilesystem::new().copy_dir_all(&dst.path().join("nope"), dst.path());
        assert!(result.is_err());
    }

    #[test]
    fn find_file_searches_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("proj/deep")).unwrap();
        fs::write(dir.path().join("proj/deep/defines.txt"), "FOO").unwrap();

        let found = LocalFilesystem::new()
            .find_file(dir.path(), "defines.txt")
            .unwrap();

        assert_eq!(found, Some(dir.path().join("proj/deep/defines.txt")));
        assert_eq!(
            LocalFilesystem::new().find_file(dir.path(), "other.txt").unwrap(),
            None
        );
    }

    #[test]
    fn list_dir_is_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let names = LocalFilesystem::new().list_dir(dir.path()).unwrap();

        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
