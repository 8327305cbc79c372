//! Glob-based exclude filter.
//!
//! Patterns use shell wildcard syntax and are matched against a candidate's
//! full path string. Matching is case-sensitive and `*` also matches `/`, so
//! `*/.git` excludes every `.git` entry at any depth.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};
use crate::path::PathEntity;

/// A compiled set of exclude patterns.
///
/// # Examples
///
/// ```
/// use symwalk::{ExcludeFilter, PathEntity};
///
/// let filter = ExcludeFilter::new(["*/target", "*.tmp"]).unwrap();
/// assert!(!filter.accepts(&PathEntity::from("/src/app/target")));
/// assert!(!filter.accepts(&PathEntity::from("/src/app/a/b.tmp")));
/// assert!(filter.accepts(&PathEntity::from("/src/app/src")));
/// ```
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ExcludeFilter {
    /// Compile `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] for the first pattern that does not compile.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            builder.add(compile(pattern)?);
        }
        let set = builder.build().map_err(|source| Error::Pattern {
            pattern: patterns.join(","),
            source,
        })?;
        Ok(Self { patterns, set })
    }

    /// Check that one pattern compiles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if it does not.
    pub fn check(pattern: &str) -> Result<()> {
        compile(pattern).map(|_| ())
    }

    /// The source patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether there is nothing to exclude.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `true` unless some pattern matches the entity's path.
    #[must_use]
    pub fn accepts(&self, entity: &PathEntity) -> bool {
        !self.set.is_match(entity.as_path())
    }

    /// Convert into a predicate for
    /// [`SymlinkWalk::with_filter`](crate::SymlinkWalk::with_filter).
    pub fn into_predicate(self) -> impl FnMut(&PathEntity) -> bool {
        move |entity: &PathEntity| self.accepts(entity)
    }
}

fn compile(pattern: &str) -> Result<globset::Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(true)
        .case_insensitive(false)
        .build()
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}
