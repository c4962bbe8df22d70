//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use simulix_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SimulixError, SimulixResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle while the
/// services own another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn require_parent(&self, path: &Path) -> SimulixResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(not_found(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let mut inner = self.write_lock();
        if let Some(parent) = path.parent() {
            inner.add_dir_all(parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_lock().files.get(path.as_ref()).cloned()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SimulixResult<()> {
        self.write_lock().add_dir_all(path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SimulixResult<String> {
        self.read_file(path)
            .ok_or_else(|| not_found(path, "No such file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SimulixResult<()> {
        let mut inner = self.write_lock();
        inner.require_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_line(&self, path: &Path, line: &str) -> SimulixResult<()> {
        let mut inner = self.write_lock();
        let content = inner
            .files
            .get_mut(path)
            .ok_or_else(|| not_found(path, "No such file"))?;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(line);
        content.push('\n');
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> SimulixResult<()> {
        let mut inner = self.write_lock();
        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| not_found(from, "No such file"))?;
        inner.require_parent(to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> SimulixResult<()> {
        let mut inner = self.write_lock();
        if !inner.directories.contains(from) {
            return Err(not_found(from, "No such directory"));
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        for dir in dirs {
            inner.add_dir_all(&dir);
        }
        inner.files.extend(files);
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> SimulixResult<Vec<String>> {
        let inner = self.read_lock();
        if !inner.directories.contains(path) {
            return Err(not_found(path, "No such directory"));
        }

        let children: BTreeSet<String> = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        Ok(children.into_iter().collect())
    }

    fn find_file(&self, root: &Path, file_name: &str) -> SimulixResult<Option<PathBuf>> {
        // Component-wise path order; files and subdirectories interleave,
        // unlike a real sorted walk.
        Ok(self
            .read_lock()
            .files
            .keys()
            .find(|p| p.starts_with(root) && p.file_name().is_some_and(|n| n == file_name))
            .cloned())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read_lock().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read_lock().directories.contains(path)
    }
}

fn not_found(path: &Path, reason: &str) -> SimulixError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/exemain.c"), "x").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/exemain.c"), "x").unwrap();
        assert_eq!(fs.read_file("/out/exemain.c").as_deref(), Some("x"));
    }

    #[test]
    fn list_dir_returns_direct_children() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/out/proj/proj_model_grt_rtw/model.c", "");
        fs.add_file("/out/readme.txt", "");
        fs.create_dir_all(Path::new("/out/R2019b")).unwrap();

        let names = fs.list_dir(Path::new("/out")).unwrap();

        assert_eq!(names, vec!["R2019b", "proj", "readme.txt"]);
        assert!(fs.is_dir(Path::new("/out/proj/proj_model_grt_rtw")));
    }

    #[test]
    fn copy_dir_all_copies_tree() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tpl/includes/a.h", "a");
        fs.add_file("/tpl/includes/sub/b.h", "b");

        fs.copy_dir_all(Path::new("/tpl/includes"), Path::new("/out/includes"))
            .unwrap();

        assert_eq!(fs.read_file("/out/includes/a.h").as_deref(), Some("a"));
        assert_eq!(fs.read_file("/out/includes/sub/b.h").as_deref(), Some("b"));
        assert!(fs.is_dir(Path::new("/out/includes/sub")));
    }

    #[test]
    fn append_line_on_unterminated_file() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/out/defines.txt", "FOO");

        fs.append_line(Path::new("/out/defines.txt"), "SIMULIX").unwrap();

        assert_eq!(
            fs.read_file("/out/defines.txt").as_deref(),
            Some("FOO\nSIMULIX\n")
        );
    }
}
