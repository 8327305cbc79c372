//! Symlink-aware path resolution and directory traversal.
//!
//! # Key Concepts
//!
//! ## Chains
//!
//! Resolving a path is a chain of steps. Each step appends one pending segment
//! to the path under construction; when the result is a symlink its stored
//! target is spliced in, and the chain carries on from the link's parent (or
//! from the root, for an absolute target). A chain ends when nothing is
//! pending and the path exists, or with a classification:
//!
//! - **missing**: a plain segment does not exist
//! - **broken link**: a segment that came from a symlink's target does not
//!   exist; the symlink is reported, not the dangling target
//! - **recursive link**: a symlink is met again while its own expansion is
//!   still in progress
//! - **excluded**: the filter rejected a candidate
//!
//! ## Walks
//!
//! [`SymlinkWalk::iter_dir`] resolves each immediate child of a directory.
//! [`SymlinkWalk::iter_tree`] also enters every resolved directory, keeping the
//! symlinks that led there active until its subtree is done, so a link that
//! points back at an ancestor is caught as recursive instead of looping.
//!
//! ## Reports
//!
//! Walks only yield good paths. Everything else is collected in the
//! [`WalkReport`] owned by the walker. The report accumulates across walks
//! until [`SymlinkWalk::reset`] is called (or a [`Session`] ends).
//!
//! # Examples
//!
//! ```no_run
//! use symwalk::SymlinkWalk;
//!
//! let mut walker = SymlinkWalk::new().with_unique_paths(true);
//! for entry in walker.iter_tree("/usr/share/doc")? {
//!     println!("{}", entry?);
//! }
//! for link in walker.report().sorted_broken_links() {
//!     eprintln!("broken: {link}");
//! }
//! # Ok::<(), symwalk::Error>(())
//! ```

mod iter;
mod report;
mod scan;
mod stack;

use std::ffi::OsString;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::{FileSystem, StdFileSystem};
use crate::path::normalize::{expand_tilde, split_path};
use crate::path::{PathEntity, PathOutcome};

pub use iter::Walk;
pub use report::WalkReport;
pub use stack::{PendingSegment, ResolutionStack, SymlinkGuard};

use iter::{Expansion, Target};
use scan::{scan, ScanState};

/// Options for [`SymlinkWalk::resolve_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Expand a leading `~` to the home directory.
    pub expand_user: bool,
    /// Turn a bad outcome into an error instead of returning it.
    pub strict: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            expand_user: true,
            strict: false,
        }
    }
}

impl ResolveOptions {
    /// Default options with `strict` set.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

type Filter = Box<dyn FnMut(&PathEntity) -> bool>;

/// A traversal driver.
///
/// Holds the filter, the uniqueness flag and the [`WalkReport`] accumulated by
/// every walk it has run. One driver runs one walk at a time.
pub struct SymlinkWalk<F: FileSystem = StdFileSystem> {
    fs: F,
    filter: Option<Filter>,
    unique: bool,
    expand_user: bool,
    state: ScanState,
}

impl SymlinkWalk<StdFileSystem> {
    /// A driver over the real filesystem, with no filter and uniqueness off.
    #[must_use]
    pub fn new() -> Self {
        Self::with_filesystem(StdFileSystem)
    }
}

impl Default for SymlinkWalk<StdFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> SymlinkWalk<F> {
    /// A driver over a custom filesystem.
    pub fn with_filesystem(fs: F) -> Self {
        Self {
            fs,
            filter: None,
            unique: false,
            expand_user: true,
            state: ScanState::default(),
        }
    }

    /// Set the filter. It is called on every candidate, including partially
    /// resolved ones; returning `false` excludes the candidate and everything
    /// below it.
    #[must_use]
    pub fn with_filter<P>(mut self, filter: P) -> Self
    where
        P: FnMut(&PathEntity) -> bool + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Suppress second visits to an already resolved path.
    #[must_use]
    pub fn with_unique_paths(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Whether walk targets given as paths get a leading `~` expanded.
    /// Defaults to `true`.
    #[must_use]
    pub fn with_expand_user(mut self, expand_user: bool) -> Self {
        self.expand_user = expand_user;
        self
    }

    /// The filesystem the driver runs against.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Whether uniqueness mode is on.
    pub fn unique_paths(&self) -> bool {
        self.unique
    }

    /// Everything recorded so far.
    pub fn report(&self) -> &WalkReport {
        &self.state.report
    }

    /// Resolve one path.
    ///
    /// Runs on scratch state: the driver's filter, uniqueness flag and report
    /// are neither used nor touched.
    ///
    /// # Errors
    ///
    /// Returns an error if `~` expansion fails or the working directory is
    /// unavailable for a relative path. In strict mode a missing path, broken
    /// link or recursive link is also an error.
    pub fn resolve_path(
        &self,
        path: impl AsRef<Path>,
        options: ResolveOptions,
    ) -> Result<PathOutcome> {
        let (start, seed) = seed_for(path.as_ref(), options.expand_user)?;
        let mut accept_all = |_: &PathEntity| true;
        let outcome = scan(
            &self.fs,
            &mut accept_all,
            &mut ScanState::default(),
            start,
            seed,
            false,
        )
        .ok_or_else(|| Error::InvalidPath {
            path: path.as_ref().to_path_buf(),
            reason: "path was excluded".to_string(),
        })?;

        if options.strict {
            outcome.into_result().map(PathOutcome::Resolved)
        } else {
            Ok(outcome)
        }
    }

    /// Lazily list the immediate children of a directory.
    ///
    /// The target is resolved first. If it cannot be resolved its outcome is
    /// recorded in the report; if it is not a directory the walk is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `~` expansion fails or the working directory is
    /// unavailable for a relative path.
    pub fn iter_dir(&mut self, path: impl AsRef<Path>) -> Result<Walk<'_, F>> {
        let (base, seed) = seed_for(path.as_ref(), self.expand_user)?;
        Ok(Walk::new(self, Expansion::Leaf, Target::Unresolved { base, seed }))
    }

    /// [`iter_dir`](Self::iter_dir) on a target the caller has already
    /// resolved.
    pub fn iter_dir_resolved(&mut self, target: PathEntity) -> Walk<'_, F> {
        Walk::new(self, Expansion::Leaf, Target::Resolved(target))
    }

    /// Lazily walk the target and its subtree in depth-first pre-order.
    ///
    /// # Errors
    ///
    /// Same as [`iter_dir`](Self::iter_dir).
    pub fn iter_tree(&mut self, path: impl AsRef<Path>) -> Result<Walk<'_, F>> {
        let (base, seed) = seed_for(path.as_ref(), self.expand_user)?;
        Ok(Walk::new(self, Expansion::Tree, Target::Unresolved { base, seed }))
    }

    /// [`iter_tree`](Self::iter_tree) on a target the caller has already
    /// resolved.
    pub fn iter_tree_resolved(&mut self, target: PathEntity) -> Walk<'_, F> {
        Walk::new(self, Expansion::Tree, Target::Resolved(target))
    }

    /// Clear the report and any leftover chain state.
    pub fn reset(&mut self) {
        log::trace!("resetting walk state");
        self.state.clear();
    }

    /// Borrow the driver for a scope that ends with [`reset`](Self::reset).
    pub fn session(&mut self) -> Session<'_, F> {
        Session { walker: self }
    }

    /// Run one chain against the driver's state, applying the filter when
    /// `filtered` is set.
    fn scan_candidate(
        &mut self,
        start: PathEntity,
        seed: Vec<OsString>,
        hold: bool,
        filtered: bool,
    ) -> Option<PathOutcome> {
        let Self {
            fs, filter, state, ..
        } = self;
        match filter {
            Some(filter) if filtered => scan(fs, filter, state, start, seed, hold),
            _ => scan(fs, &mut |_: &PathEntity| true, state, start, seed, hold),
        }
    }

    /// Count a visit in uniqueness mode. Returns `false` for a repeat.
    fn admit(&mut self, resolved: &PathEntity) -> bool {
        !self.unique || self.state.report.record_visit(resolved)
    }
}

impl<F: FileSystem + fmt::Debug> fmt::Debug for SymlinkWalk<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymlinkWalk")
            .field("fs", &self.fs)
            .field("filtered", &self.filter.is_some())
            .field("unique", &self.unique)
            .field("expand_user", &self.expand_user)
            .field("report", &self.state.report)
            .finish()
    }
}

/// A driver borrowed for one scope. Derefs to the driver and resets it when
/// dropped, whichever way the scope is left.
///
/// ```
/// use symwalk::SymlinkWalk;
///
/// let mut walker = SymlinkWalk::new();
/// {
///     let session = walker.session();
///     assert!(session.report().is_clean());
/// }
/// assert!(walker.report().is_clean());
/// ```
pub struct Session<'w, F: FileSystem> {
    walker: &'w mut SymlinkWalk<F>,
}

impl<F: FileSystem> Deref for Session<'_, F> {
    type Target = SymlinkWalk<F>;

    fn deref(&self) -> &Self::Target {
        self.walker
    }
}

impl<F: FileSystem> DerefMut for Session<'_, F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.walker
    }
}

impl<F: FileSystem> Drop for Session<'_, F> {
    fn drop(&mut self) {
        self.walker.reset();
    }
}

/// Resolve one path against the real filesystem.
///
/// Shorthand for [`SymlinkWalk::resolve_path`] on a fresh driver.
///
/// # Errors
///
/// See [`SymlinkWalk::resolve_path`].
///
/// # Examples
///
/// ```
/// use symwalk::{resolve_path, ResolveOptions};
///
/// let outcome = resolve_path("/definitely/not/here", ResolveOptions::default()).unwrap();
/// assert!(outcome.is_missing());
///
/// let err = resolve_path("/definitely/not/here", ResolveOptions::strict()).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn resolve_path(path: impl AsRef<Path>, options: ResolveOptions) -> Result<PathOutcome> {
    SymlinkWalk::new().resolve_path(path, options)
}

/// Starting entity and seed segments for a user-supplied path.
fn seed_for(path: &Path, expand_user: bool) -> Result<(PathEntity, Vec<OsString>)> {
    let path = if expand_user {
        expand_tilde(path)?
    } else {
        path.to_path_buf()
    };
    let split = split_path(&path);
    let start = match split.root {
        Some(root) => PathEntity::new(root),
        None => PathEntity::current_dir()?,
    };
    Ok((start, split.segments))
}
