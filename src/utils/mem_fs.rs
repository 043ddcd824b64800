//! In-memory filesystem used by the unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use super::file_ops::FileSystem;

#[derive(Default)]
pub struct MemFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.borrow_mut().insert(path.into());
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.borrow_mut().insert(path.into(), content.to_string());
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
        let rel = path.strip_prefix(from).expect("prefix checked by caller");
        if rel.as_os_str().is_empty() {
            to.to_path_buf()
        } else {
            to.join(rel)
        }
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such path: {}", path.display()),
        )
    }
}

impl FileSystem for MemFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.dirs.borrow().contains(path) {
            return Err(Self::not_found(path));
        }
        let mut entries: Vec<PathBuf> = self
            .dirs
            .borrow()
            .iter()
            .chain(self.files.borrow().keys())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        entries.sort();
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        if !self.dirs.borrow().contains(path) {
            return Err(Self::not_found(path));
        }
        self.dirs.borrow_mut().retain(|d| !d.starts_with(path));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if !self.dirs.borrow().contains(from) && !self.files.borrow().contains_key(from) {
            return Err(Self::not_found(from));
        }

        let moved_dirs: Vec<PathBuf> = self
            .dirs
            .borrow()
            .iter()
            .filter(|d| d.starts_with(from))
            .cloned()
            .collect();
        let moved_files: Vec<(PathBuf, String)> = self
            .files
            .borrow()
            .iter()
            .filter(|(f, _)| f.starts_with(from))
            .map(|(f, c)| (f.clone(), c.clone()))
            .collect();

        self.dirs.borrow_mut().retain(|d| !d.starts_with(from));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(from));

        for dir in moved_dirs {
            self.dirs.borrow_mut().insert(Self::rebase(&dir, from, to));
        }
        for (file, content) in moved_files {
            self.files
                .borrow_mut()
                .insert(Self::rebase(&file, from, to), content);
        }
        Ok(())
    }
}
