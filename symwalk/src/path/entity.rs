//! The path value passed around by the engine.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::fs::DirEntry;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

/// File type recorded by a directory scan.
///
/// The type describes the entry itself: a symlink is `Symlink` regardless of
/// what it points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A directory.
    Dir,
    /// A symbolic link.
    Symlink,
    /// Anything else (regular files, devices, sockets, ...).
    Other,
}

/// A filesystem path, whatever form it arrived in.
///
/// Paths built from strings or `Path` values and paths yielded by a directory
/// scan are the same type. Entities from a scan additionally remember the
/// entry's file type, which answers existence and type queries without another
/// system call.
///
/// Equality and hashing use the exact string form. Ordering is
/// case-insensitive, with the exact form as tie-breaker.
///
/// # Examples
///
/// ```
/// use symwalk::PathEntity;
///
/// let a = PathEntity::from("/tmp/Alpha");
/// let b = PathEntity::from("/tmp/beta");
/// assert!(a < b);
/// assert_eq!(a, PathEntity::from(std::path::PathBuf::from("/tmp/Alpha")));
/// ```
#[derive(Clone)]
pub struct PathEntity {
    path: PathBuf,
    kind: Option<EntryKind>,
}

impl PathEntity {
    /// Create an entity from any path-like value.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: None,
        }
    }

    /// Create an entity with a known file type, as a directory scan would.
    #[must_use]
    pub fn with_kind(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind: Some(kind),
        }
    }

    /// Create an entity from a `read_dir` entry, keeping its file type.
    #[must_use]
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        let kind = entry.file_type().ok().map(|ft| {
            if ft.is_symlink() {
                EntryKind::Symlink
            } else if ft.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::Other
            }
        });
        match kind {
            Some(kind) => Self::with_kind(entry.path(), kind),
            None => Self::new(entry.path()),
        }
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current_dir() -> io::Result<Self> {
        std::env::current_dir().map(Self::new)
    }

    /// The native path form, for passing to filesystem calls.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// The file type cached from a directory scan, if any.
    #[must_use]
    pub fn kind(&self) -> Option<EntryKind> {
        self.kind
    }

    /// Whether this entity was produced by a directory scan.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        self.kind.is_some()
    }

    /// The final component, if it is a normal name.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// The parent directory, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.path.parent().map(Self::new)
    }

    /// Append one segment, producing a plain (unscanned) entity.
    #[must_use]
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        Self::new(self.path.join(segment))
    }

    /// Whether something exists at this path.
    ///
    /// Entities from a directory scan are assumed to exist: the scan would not
    /// have produced them otherwise.
    pub fn exists<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        self.kind.is_some() || fs.exists(&self.path)
    }

    /// Whether this path is a symlink.
    pub fn is_symlink<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        match self.kind {
            Some(kind) => kind == EntryKind::Symlink,
            None => fs.is_symlink(&self.path),
        }
    }

    /// Whether this path is a directory, following symlinks.
    pub fn is_dir<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        match self.kind {
            Some(EntryKind::Dir) => true,
            Some(EntryKind::Other) => false,
            Some(EntryKind::Symlink) | None => fs.is_dir(&self.path),
        }
    }

    fn sort_key(&self) -> String {
        self.path.to_string_lossy().to_lowercase()
    }
}

impl PartialEq for PathEntity {
    fn eq(&self, other: &Self) -> bool {
        self.path.as_os_str() == other.path.as_os_str()
    }
}

impl Eq for PathEntity {}

impl Hash for PathEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.as_os_str().hash(state);
    }
}

impl PartialOrd for PathEntity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathEntity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.path.as_os_str().cmp(other.path.as_os_str()))
    }
}

impl fmt::Debug for PathEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathEntity")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for PathEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for PathEntity {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for PathEntity {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for PathEntity {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PathEntity {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PathEntity {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<PathEntity> for PathBuf {
    fn from(entity: PathEntity) -> Self {
        entity.path
    }
}
