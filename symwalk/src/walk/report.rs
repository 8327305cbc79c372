//! Out-of-band classification of everything a walk did not yield.

use std::collections::{HashMap, HashSet};

use crate::path::{PathEntity, PathOutcome};

/// Paths recorded during a traversal, by category.
///
/// Good paths are delivered through the walk itself; everything else lands
/// here. Collections are unordered; the `sorted_*` helpers return them in
/// [`PathEntity`] order for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    skipped: HashSet<PathEntity>,
    missing: HashSet<PathEntity>,
    broken: HashSet<PathEntity>,
    recursive: HashSet<PathEntity>,
    path_hits: HashMap<PathEntity, usize>,
}

impl WalkReport {
    /// Paths rejected by the filter.
    #[must_use]
    pub fn skipped(&self) -> &HashSet<PathEntity> {
        &self.skipped
    }

    /// Paths with a missing non-symlink segment.
    #[must_use]
    pub fn missing(&self) -> &HashSet<PathEntity> {
        &self.missing
    }

    /// Symlinks whose targets could not be resolved.
    #[must_use]
    pub fn broken_links(&self) -> &HashSet<PathEntity> {
        &self.broken
    }

    /// Symlinks that re-entered their own expansion.
    #[must_use]
    pub fn recursive_links(&self) -> &HashSet<PathEntity> {
        &self.recursive
    }

    /// Visit counts for every resolved path (uniqueness mode only).
    #[must_use]
    pub fn path_hits(&self) -> &HashMap<PathEntity, usize> {
        &self.path_hits
    }

    /// Paths reached more than once, with their hit counts, sorted.
    #[must_use]
    pub fn duplicates(&self) -> Vec<(&PathEntity, usize)> {
        let mut dups: Vec<_> = self
            .path_hits
            .iter()
            .filter(|(_, &hits)| hits > 1)
            .map(|(path, &hits)| (path, hits))
            .collect();
        dups.sort();
        dups
    }

    /// [`skipped`](Self::skipped), sorted.
    #[must_use]
    pub fn sorted_skipped(&self) -> Vec<&PathEntity> {
        sorted(&self.skipped)
    }

    /// [`missing`](Self::missing), sorted.
    #[must_use]
    pub fn sorted_missing(&self) -> Vec<&PathEntity> {
        sorted(&self.missing)
    }

    /// [`broken_links`](Self::broken_links), sorted.
    #[must_use]
    pub fn sorted_broken_links(&self) -> Vec<&PathEntity> {
        sorted(&self.broken)
    }

    /// [`recursive_links`](Self::recursive_links), sorted.
    #[must_use]
    pub fn sorted_recursive_links(&self) -> Vec<&PathEntity> {
        sorted(&self.recursive)
    }

    /// True when nothing was skipped, duplicated, missing or broken.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
            && self.missing.is_empty()
            && self.broken.is_empty()
            && self.recursive.is_empty()
            && self.path_hits.values().all(|&hits| hits <= 1)
    }

    /// Whether any missing path or bad link was recorded.
    #[must_use]
    pub fn has_bad_paths(&self) -> bool {
        !(self.missing.is_empty() && self.broken.is_empty() && self.recursive.is_empty())
    }

    pub(crate) fn record_skipped(&mut self, path: PathEntity) {
        self.skipped.insert(path);
    }

    /// File a bad outcome under its category. Resolved outcomes are ignored.
    pub(crate) fn record_outcome(&mut self, outcome: &PathOutcome) {
        match outcome {
            PathOutcome::Resolved(_) => {}
            PathOutcome::Missing(path) => {
                self.missing.insert(path.clone());
            }
            PathOutcome::BrokenLink(path) => {
                self.broken.insert(path.clone());
            }
            PathOutcome::RecursiveLink(path) => {
                self.recursive.insert(path.clone());
            }
        }
    }

    /// Count a visit. Returns `true` on the first visit.
    pub(crate) fn record_visit(&mut self, path: &PathEntity) -> bool {
        match self.path_hits.get_mut(path) {
            Some(hits) => {
                *hits += 1;
                false
            }
            None => {
                self.path_hits.insert(path.clone(), 1);
                true
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.skipped.clear();
        self.missing.clear();
        self.broken.clear();
        self.recursive.clear();
        self.path_hits.clear();
    }
}

fn sorted(set: &HashSet<PathEntity>) -> Vec<&PathEntity> {
    let mut paths: Vec<_> = set.iter().collect();
    paths.sort();
    paths
}
