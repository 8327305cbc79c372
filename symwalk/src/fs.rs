//! Filesystem capability used by the resolution engine.
//!
//! The engine never touches `std::fs` directly. Everything it needs from the
//! filesystem goes through [`FileSystem`], which keeps the algorithm testable
//! against synthetic trees and lets callers wrap the real filesystem (for
//! example to count or restrict system calls).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::path::PathEntity;

/// The system calls the engine relies on.
///
/// Queries on symlinks follow the same conventions as `std::fs`:
/// [`exists`](FileSystem::exists) and [`is_dir`](FileSystem::is_dir) follow
/// links, [`is_symlink`](FileSystem::is_symlink) does not.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Returns `true` if something exists at `path` (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is a directory (following symlinks).
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns `true` if `path` itself is a symlink.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Reads the stored target of the symlink at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a symlink or cannot be read.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Lists the immediate children of the directory at `path`.
    ///
    /// The directory handle is closed before this returns. Entries carry the
    /// file type reported by the scan, so later type queries on them are free.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened or read.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathEntity>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        (**self).is_symlink(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).read_link(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathEntity>> {
        (**self).list_dir(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathEntity>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            entries.push(PathEntity::from_dir_entry(&entry?));
        }
        log::trace!("listed {} entries in {}", entries.len(), path.display());
        Ok(entries)
    }
}
