//! Bookkeeping for an in-progress resolution chain.
//!
//! [`ResolutionStack`] holds the segments still to be appended to the path
//! under construction. [`SymlinkGuard`] holds the symlinks whose expansion is
//! in progress. [`ChainScope`] borrows both for the duration of one chain and
//! restores them when it is dropped.

use std::ffi::{OsStr, OsString};

use crate::path::PathEntity;

/// A segment waiting to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSegment {
    /// The segment text (a name or `..`).
    pub segment: OsString,
    /// The symlink whose stored target contributed this segment.
    pub link: Option<PathEntity>,
}

impl PendingSegment {
    /// Whether the segment came from a symlink's stored target.
    #[must_use]
    pub fn in_link(&self) -> bool {
        self.link.is_some()
    }
}

/// LIFO worklist of pending segments; the next one to append is on top.
#[derive(Debug, Clone, Default)]
pub struct ResolutionStack {
    segments: Vec<PendingSegment>,
}

impl ResolutionStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Push segments given in left-to-right order so that the leftmost one
    /// ends up on top.
    pub fn push_segments<I>(&mut self, segments: I, link: Option<&PathEntity>)
    where
        I: IntoIterator<Item = OsString>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.segments
            .extend(segments.into_iter().rev().map(|segment| PendingSegment {
                segment,
                link: link.cloned(),
            }));
    }

    /// Remove and return the next segment.
    pub fn pop(&mut self) -> Option<PendingSegment> {
        self.segments.pop()
    }

    /// The next segment, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&PendingSegment> {
        self.segments.last()
    }

    /// Segments above `mark`, in the order they would be appended.
    pub fn unresolved_tail(&self, mark: usize) -> impl Iterator<Item = &OsStr> {
        self.segments[mark.min(self.segments.len())..]
            .iter()
            .rev()
            .map(|s| s.segment.as_os_str())
    }

    /// Drop every segment above `mark`.
    pub fn truncate(&mut self, mark: usize) {
        self.segments.truncate(mark);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

/// Stack of symlinks being expanded on the active chain.
///
/// Membership is by path equality. Entries are released in nesting order.
#[derive(Debug, Clone, Default)]
pub struct SymlinkGuard {
    links: Vec<PathEntity>,
}

impl SymlinkGuard {
    /// Create an empty guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of links being expanded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no link is being expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Whether `link` is mid-expansion.
    #[must_use]
    pub fn contains(&self, link: &PathEntity) -> bool {
        self.links.contains(link)
    }

    /// Start expanding `link`.
    pub fn push(&mut self, link: PathEntity) {
        self.links.push(link);
    }

    /// The innermost link being expanded.
    #[must_use]
    pub fn innermost(&self) -> Option<&PathEntity> {
        self.links.last()
    }

    /// Finish every expansion started after `mark`.
    pub fn release(&mut self, mark: usize) {
        self.links.truncate(mark);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.links.clear();
    }
}

/// Borrow of both stacks for one resolution chain.
///
/// On drop, pending segments pushed during the chain are always discarded.
/// Symlinks pushed during the chain are released too unless
/// [`hold`](ChainScope::hold) was called, in which case the caller takes over
/// releasing them (a directory being expanded keeps its links active until
/// its subtree is done).
pub(crate) struct ChainScope<'a> {
    pub(crate) links: &'a mut SymlinkGuard,
    pub(crate) pending: &'a mut ResolutionStack,
    link_mark: usize,
    pending_mark: usize,
    held: bool,
}

impl<'a> ChainScope<'a> {
    pub(crate) fn new(links: &'a mut SymlinkGuard, pending: &'a mut ResolutionStack) -> Self {
        let link_mark = links.len();
        let pending_mark = pending.len();
        Self {
            links,
            pending,
            link_mark,
            pending_mark,
            held: false,
        }
    }

    pub(crate) fn pending_mark(&self) -> usize {
        self.pending_mark
    }

    pub(crate) fn hold(&mut self) {
        self.held = true;
    }
}

impl Drop for ChainScope<'_> {
    fn drop(&mut self) {
        self.pending.truncate(self.pending_mark);
        if !self.held {
            self.links.release(self.link_mark);
        }
    }
}
