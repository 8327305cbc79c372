//! Terminal outcomes of resolving a single path.

use std::fmt;

use crate::error::{Error, Result};
use crate::path::PathEntity;

/// How the resolution of one path ended.
///
/// Exactly one variant describes each terminal point. A broken symlink is
/// never also reported as missing.
///
/// # Examples
///
/// ```
/// use symwalk::{PathEntity, PathOutcome};
///
/// let outcome = PathOutcome::BrokenLink(PathEntity::from("/tmp/link"));
/// assert!(outcome.is_bad_link());
/// assert!(!outcome.exists());
/// assert!(outcome.into_result().unwrap_err().is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathOutcome {
    /// The path exists; the entity is its fully resolved form.
    Resolved(PathEntity),
    /// A non-symlink segment does not exist. The entity is the deepest
    /// reachable path with the unresolved tail appended.
    Missing(PathEntity),
    /// The entity is a symlink whose target could not be resolved.
    BrokenLink(PathEntity),
    /// The entity is a symlink that re-entered its own expansion.
    RecursiveLink(PathEntity),
}

impl PathOutcome {
    /// The path this outcome refers to.
    #[must_use]
    pub fn entity(&self) -> &PathEntity {
        match self {
            Self::Resolved(e) | Self::Missing(e) | Self::BrokenLink(e) | Self::RecursiveLink(e) => e,
        }
    }

    /// Consume the outcome, returning its path.
    #[must_use]
    pub fn into_entity(self) -> PathEntity {
        match self {
            Self::Resolved(e) | Self::Missing(e) | Self::BrokenLink(e) | Self::RecursiveLink(e) => e,
        }
    }

    /// Whether the path resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Whether something usable exists at the path.
    ///
    /// Like `Path::exists`, neither a broken nor a looping symlink exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Whether a plain segment was missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// Whether the outcome is a broken symlink.
    #[must_use]
    pub fn is_broken_link(&self) -> bool {
        matches!(self, Self::BrokenLink(_))
    }

    /// Whether the outcome is a recursive symlink.
    #[must_use]
    pub fn is_recursive_link(&self) -> bool {
        matches!(self, Self::RecursiveLink(_))
    }

    /// Broken or recursive symlink.
    #[must_use]
    pub fn is_bad_link(&self) -> bool {
        self.is_broken_link() || self.is_recursive_link()
    }

    /// Anything other than a resolved path.
    #[must_use]
    pub fn is_bad_path(&self) -> bool {
        !self.is_resolved()
    }

    /// Convert to a `Result`, turning every bad outcome into an error that
    /// carries the offending path.
    ///
    /// # Errors
    ///
    /// - [`Error::PathNotFound`] for `Missing`
    /// - [`Error::BrokenLink`] for `BrokenLink`
    /// - [`Error::RecursiveLink`] for `RecursiveLink`
    pub fn into_result(self) -> Result<PathEntity> {
        match self {
            Self::Resolved(e) => Ok(e),
            Self::Missing(e) => Err(Error::PathNotFound {
                path: e.into_path_buf(),
            }),
            Self::BrokenLink(e) => Err(Error::BrokenLink {
                path: e.into_path_buf(),
            }),
            Self::RecursiveLink(e) => Err(Error::RecursiveLink {
                path: e.into_path_buf(),
            }),
        }
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Resolved(_) => "resolved",
            Self::Missing(_) => "missing",
            Self::BrokenLink(_) => "broken link",
            Self::RecursiveLink(_) => "recursive link",
        };
        write!(f, "{label}: {}", self.entity())
    }
}
