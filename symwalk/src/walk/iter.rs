//! Lazy traversal sequences.

use std::ffi::OsString;
use std::iter::FusedIterator;
use std::vec;

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::{PathEntity, PathOutcome};
use crate::walk::SymlinkWalk;

/// What happens to a resolved entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expansion {
    /// Yield it; directories are not entered. The target itself is not
    /// yielded, only its children.
    Leaf,
    /// Yield it, then its subtree if it is a directory.
    Tree,
}

/// Where a walk starts.
#[derive(Debug)]
pub(crate) enum Target {
    /// Resolve `base` with `seed` appended before using it.
    Unresolved {
        base: PathEntity,
        seed: Vec<OsString>,
    },
    /// Use as is.
    Resolved(PathEntity),
}

/// A directory whose children are being visited.
#[derive(Debug)]
struct DirFrame {
    dir: PathEntity,
    /// `None` until the first child is requested.
    entries: Option<vec::IntoIter<PathEntity>>,
    /// Guard depth to release to once the subtree is done.
    link_mark: usize,
}

/// A lazy, single-pass traversal returned by [`SymlinkWalk::iter_dir`] and
/// [`SymlinkWalk::iter_tree`].
///
/// Items are good paths in depth-first pre-order. Everything else is recorded
/// in the walker's [`WalkReport`](crate::WalkReport), readable once the walk
/// is dropped. A directory that cannot be listed produces one
/// [`Error::ReadDir`] item and the walk carries on with its siblings.
///
/// Dropping a walk early releases every symlink it was still expanding.
pub struct Walk<'w, F: FileSystem> {
    walker: &'w mut SymlinkWalk<F>,
    expansion: Expansion,
    target: Option<Target>,
    frames: Vec<DirFrame>,
    link_mark: usize,
    pending_mark: usize,
}

impl<'w, F: FileSystem> Walk<'w, F> {
    pub(crate) fn new(
        walker: &'w mut SymlinkWalk<F>,
        expansion: Expansion,
        target: Target,
    ) -> Self {
        let link_mark = walker.state.links.len();
        let pending_mark = walker.state.pending.len();
        Self {
            walker,
            expansion,
            target: Some(target),
            frames: Vec::new(),
            link_mark,
            pending_mark,
        }
    }

    /// Number of directories currently open on the walk.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Resolve the walk's target. Returns the entity to yield, if any.
    fn start(&mut self, target: Target) -> Option<PathEntity> {
        let mark = self.walker.state.links.len();
        let resolved = match target {
            Target::Resolved(entity) => entity,
            Target::Unresolved { base, seed } => {
                match self.walker.scan_candidate(base, seed, true, false)? {
                    PathOutcome::Resolved(entity) => entity,
                    _ => return None,
                }
            }
        };
        self.settle(resolved, mark, self.expansion == Expansion::Tree)
    }

    /// Decide what to do with a freshly resolved entry whose expanded
    /// symlinks sit on the guard above `mark`.
    fn settle(
        &mut self,
        resolved: PathEntity,
        mark: usize,
        yield_it: bool,
    ) -> Option<PathEntity> {
        if !self.walker.admit(&resolved) {
            log::debug!("already visited {resolved}");
            self.walker.state.links.release(mark);
            return None;
        }

        let descend = match (self.expansion, self.frames.is_empty()) {
            (Expansion::Tree, _) | (Expansion::Leaf, true) => {
                resolved.is_dir(&self.walker.fs)
            }
            (Expansion::Leaf, false) => false,
        };
        if descend {
            self.frames.push(DirFrame {
                dir: resolved.clone(),
                entries: None,
                link_mark: mark,
            });
        } else {
            self.walker.state.links.release(mark);
        }

        yield_it.then_some(resolved)
    }

    fn close_frame(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.walker.state.links.release(frame.link_mark);
        }
    }
}

impl<F: FileSystem> Iterator for Walk<'_, F> {
    type Item = Result<PathEntity>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(target) = self.target.take() {
            if let Some(entity) = self.start(target) {
                return Some(Ok(entity));
            }
        }

        loop {
            let frame = self.frames.last_mut()?;

            if frame.entries.is_none() {
                match self.walker.fs.list_dir(frame.dir.as_path()) {
                    Ok(entries) => frame.entries = Some(entries.into_iter()),
                    Err(source) => {
                        log::warn!("cannot list {}: {source}", frame.dir);
                        let path = frame.dir.clone().into_path_buf();
                        self.close_frame();
                        return Some(Err(Error::ReadDir { path, source }));
                    }
                }
            }

            let Some(child) = frame.entries.as_mut().and_then(Iterator::next) else {
                self.close_frame();
                continue;
            };

            let mark = self.walker.state.links.len();
            let hold = self.expansion == Expansion::Tree;
            if let Some(PathOutcome::Resolved(resolved)) =
                self.walker.scan_candidate(child, Vec::new(), hold, true)
            {
                if let Some(entity) = self.settle(resolved, mark, true) {
                    return Some(Ok(entity));
                }
            }
        }
    }
}

impl<F: FileSystem> FusedIterator for Walk<'_, F> {}

impl<F: FileSystem> Drop for Walk<'_, F> {
    fn drop(&mut self) {
        self.walker.state.links.release(self.link_mark);
        self.walker.state.pending.truncate(self.pending_mark);
    }
}

impl<F: FileSystem> std::fmt::Debug for Walk<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk")
            .field("expansion", &self.expansion)
            .field("frames", &self.frames)
            .field("started", &self.target.is_none())
            .finish_non_exhaustive()
    }
}
