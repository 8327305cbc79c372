//! Error types for the symwalk library.
//!
//! This module provides the error hierarchy for all operations in the
//! symwalk library, using `thiserror` for ergonomic error handling.
//!
//! Most resolution problems are reported as data (see
//! [`PathOutcome`](crate::path::PathOutcome)); the variants here are produced
//! by strict resolution, by I/O failures that cannot be classified, and by the
//! configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a symwalk error.
///
/// # Examples
///
/// ```
/// use symwalk::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the symwalk library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The deepest reachable path plus its unresolved tail.
        path: PathBuf,
    },

    /// A symlink's target chain does not exist.
    ///
    /// This is a specialization of [`Error::PathNotFound`]:
    /// [`Error::is_not_found`] returns `true` for both.
    #[error("broken symlink: {}", path.display())]
    BrokenLink {
        /// The symlink itself, not its dangling target.
        path: PathBuf,
    },

    /// A symlink re-entered its own expansion.
    #[error("recursive symlink: {}", path.display())]
    RecursiveLink {
        /// The symlink that was encountered a second time.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An exclude pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// Broken symlinks count as "not found" so callers can catch both broadly.
    ///
    /// # Examples
    ///
    /// ```
    /// use symwalk::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    ///
    /// let err = Error::BrokenLink { path: PathBuf::from("/link") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. } | Self::BrokenLink { .. })
    }

    /// Check if error is a broken symlink.
    #[must_use]
    pub fn is_broken_link(&self) -> bool {
        matches!(self, Self::BrokenLink { .. })
    }

    /// Check if error is a recursive symlink.
    #[must_use]
    pub fn is_recursive_link(&self) -> bool {
        matches!(self, Self::RecursiveLink { .. })
    }

    /// The path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::PathNotFound { path }
            | Self::BrokenLink { path }
            | Self::RecursiveLink { path }
            | Self::InvalidPath { path, .. }
            | Self::ReadDir { path, .. } => Some(path),
            _ => None,
        }
    }
}
