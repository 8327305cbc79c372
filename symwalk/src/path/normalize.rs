//! Lexical path helpers used to seed and advance resolution.
//!
//! Nothing here touches the filesystem except [`expand_tilde`], which asks the
//! `home` crate for the home directory.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use symwalk::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Anything else is returned unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    let first = match components.next() {
        Some(Component::Normal(first)) => first,
        _ => return Ok(path.to_path_buf()),
    };

    if !first.to_string_lossy().starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if first != OsStr::new("~") {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    Ok(home.join(components.as_path()))
}

/// A path broken into its root and the segments still to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    /// Drive prefix and/or root directory, or `None` for a relative path.
    pub root: Option<PathBuf>,
    /// Remaining segments, left to right. `.` segments are dropped; `..`
    /// segments are kept for the engine to collapse.
    pub segments: Vec<OsString>,
}

/// Split a path into its root and segments.
///
/// # Examples
///
/// ```
/// use symwalk::path::normalize::split_path;
/// use std::path::Path;
///
/// let split = split_path(Path::new("/a/./b/../c"));
/// assert_eq!(split.root.as_deref(), Some(Path::new("/")));
/// assert_eq!(split.segments, ["a", "b", "..", "c"]);
///
/// let split = split_path(Path::new("rel/x"));
/// assert!(split.root.is_none());
/// assert_eq!(split.segments, ["rel", "x"]);
/// ```
#[must_use]
pub fn split_path(path: &Path) -> SplitPath {
    let mut root: Option<PathBuf> = None;
    let mut segments = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                root.get_or_insert_with(PathBuf::new).push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir | Component::Normal(_) => {
                segments.push(component.as_os_str().to_os_string());
            }
        }
    }

    SplitPath { root, segments }
}

/// Collapse a trailing `..` against the segment before it.
///
/// Returns `None` when the path does not end in `..`. At the root, `..` is
/// simply dropped. The caller guarantees the prefix is already free of
/// symlinks, so the lexical parent is the physical parent.
///
/// # Examples
///
/// ```
/// use symwalk::path::normalize::collapse_parent;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(collapse_parent(Path::new("/a/b/..")), Some(PathBuf::from("/a")));
/// assert_eq!(collapse_parent(Path::new("/..")), Some(PathBuf::from("/")));
/// assert_eq!(collapse_parent(Path::new("/a/b")), None);
/// ```
#[must_use]
pub fn collapse_parent(path: &Path) -> Option<PathBuf> {
    if path.components().next_back() != Some(Component::ParentDir) {
        return None;
    }
    let mut collapsed = path.to_path_buf();
    collapsed.pop();
    if collapsed.parent().is_some() {
        collapsed.pop();
    }
    Some(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/test")).unwrap();
        assert_eq!(expanded, home.join("test"));
    }

    #[test]
    fn test_expand_tilde_relative_unchanged() {
        assert_eq!(expand_tilde(Path::new("a/~")).unwrap(), Path::new("a/~"));
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        let result = expand_tilde(Path::new("~user/path"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_split_drops_current_dir() {
        let split = split_path(Path::new("./a/."));
        assert!(split.root.is_none());
        assert_eq!(split.segments, ["a"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_split_root_only() {
        let split = split_path(Path::new("/"));
        assert_eq!(split.root, Some(PathBuf::from("/")));
        assert!(split.segments.is_empty());
    }

    #[test]
    fn test_collapse_nested() {
        assert_eq!(
            collapse_parent(Path::new("/a/b/c/..")),
            Some(PathBuf::from("/a/b"))
        );
    }

    #[test]
    fn test_collapse_ignores_inner_parent() {
        assert_eq!(collapse_parent(Path::new("/a/../b")), None);
    }

    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_-]{1,10}"
        }

        proptest! {
            /// Splitting and re-joining a dot-free absolute path is lossless
            #[test]
            fn split_then_join_roundtrips(parts in prop::collection::vec(segment_strategy(), 1..=6)) {
                let path = PathBuf::from(format!("/{}", parts.join("/")));
                let split = split_path(&path);
                let mut rebuilt = split.root.unwrap();
                for segment in &split.segments {
                    rebuilt.push(segment);
                }
                prop_assert_eq!(rebuilt, path);
            }

            /// Collapsing `x/..` returns the original prefix
            #[test]
            fn collapse_undoes_push(parts in prop::collection::vec(segment_strategy(), 1..=6), extra in segment_strategy()) {
                let base = PathBuf::from(format!("/{}", parts.join("/")));
                let candidate = base.join(&extra).join("..");
                prop_assert_eq!(collapse_parent(&candidate), Some(base));
            }
        }
    }
}
