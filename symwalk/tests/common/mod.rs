//! Common test utilities for integration tests.
//!
//! [`TreeFixture`] builds directory trees with symlinks in a temporary
//! directory. [`CountingFileSystem`] wraps the real filesystem and records
//! which directories were listed.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use symwalk::{FileSystem, PathEntity, StdFileSystem, Walk};

/// A temporary directory tree, removed on drop.
#[allow(dead_code)]
pub struct TreeFixture {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Create an empty tree.
    ///
    /// The root is canonicalized so expectations do not depend on symlinks
    /// in the platform's temp path.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = fs::canonicalize(temp.path()).expect("canonicalize temp dir");
        Self { _temp: temp, root }
    }

    /// The tree's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Create a directory (and its parents).
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("create dir");
        self
    }

    /// Create a file (and its parent directories).
    pub fn file(&self, rel: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, rel).expect("write file");
        self
    }

    /// Create a symlink at `rel` storing `target` verbatim.
    #[cfg(unix)]
    pub fn symlink(&self, rel: &str, target: impl AsRef<Path>) -> &Self {
        std::os::unix::fs::symlink(target, self.path(rel)).expect("create symlink");
        self
    }
}

/// Collect a walk's items as paths relative to `root`, panicking on errors.
#[allow(dead_code)]
pub fn relative<F: FileSystem>(root: &Path, walk: Walk<'_, F>) -> Vec<String> {
    walk.map(|entry| {
        let entry = entry.expect("walk item");
        rel_string(root, entry.as_path())
    })
    .collect()
}

/// `path` relative to `root`, with `.` for the root itself.
#[allow(dead_code)]
pub fn rel_string(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Sorted relative forms of a set of entities.
#[allow(dead_code)]
pub fn sorted_relative<'a>(root: &Path, paths: impl IntoIterator<Item = &'a PathEntity>) -> Vec<String> {
    let mut rel: Vec<String> = paths
        .into_iter()
        .map(|p| rel_string(root, p.as_path()))
        .collect();
    rel.sort();
    rel
}

/// The real filesystem, with a log of every directory listing.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingFileSystem {
    listed: RefCell<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl CountingFileSystem {
    /// Directories listed so far, in order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    /// Whether `path` was ever listed.
    pub fn was_listed(&self, path: &Path) -> bool {
        self.listed.borrow().iter().any(|p| p == path)
    }
}

impl FileSystem for CountingFileSystem {
    fn exists(&self, path: &Path) -> bool {
        StdFileSystem.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        StdFileSystem.is_dir(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        StdFileSystem.is_symlink(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        StdFileSystem.read_link(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathEntity>> {
        self.listed.borrow_mut().push(path.to_path_buf());
        StdFileSystem.list_dir(path)
    }
}
