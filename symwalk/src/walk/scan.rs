//! The resolution engine.
//!
//! [`scan`] takes one candidate path and resolves it segment by segment,
//! substituting symlink targets as it meets them, until the path is fully
//! resolved or a terminal classification applies. One call handles one
//! resolution chain; directory expansion is driven by the caller.

use std::ffi::OsString;

use crate::fs::FileSystem;
use crate::path::normalize::{collapse_parent, split_path};
use crate::path::{PathEntity, PathOutcome};
use crate::walk::report::WalkReport;
use crate::walk::stack::{ChainScope, ResolutionStack, SymlinkGuard};

/// Mutable state shared by every chain of one traversal.
#[derive(Debug, Default)]
pub(crate) struct ScanState {
    pub(crate) links: SymlinkGuard,
    pub(crate) pending: ResolutionStack,
    pub(crate) report: WalkReport,
}

impl ScanState {
    pub(crate) fn clear(&mut self) {
        self.links.clear();
        self.pending.clear();
        self.report.clear();
    }
}

/// Resolve `start` with `seed` appended, one segment at a time.
///
/// Returns `None` when the filter rejected a candidate (recorded as skipped),
/// otherwise the terminal outcome. Bad outcomes are also recorded in the
/// report. When `hold_links` is set and the chain resolves, the symlinks
/// expanded along the way stay on the guard for the caller to release.
pub(crate) fn scan<F, P>(
    fs: &F,
    filter: &mut P,
    state: &mut ScanState,
    start: PathEntity,
    seed: Vec<OsString>,
    hold_links: bool,
) -> Option<PathOutcome>
where
    F: FileSystem + ?Sized,
    P: FnMut(&PathEntity) -> bool + ?Sized,
{
    let ScanState {
        links,
        pending,
        report,
    } = state;
    let mut scope = ChainScope::new(links, pending);
    scope.pending.push_segments(seed, None);

    let mut candidate = start;
    // Link whose target contributed the segment that produced `candidate`.
    let mut arrived_via: Option<PathEntity> = None;

    loop {
        if let Some(collapsed) = collapse_parent(candidate.as_path()) {
            candidate = PathEntity::new(collapsed);
        }
        log::trace!("scanning {candidate}");

        if !filter(&candidate) {
            log::debug!("excluded {candidate}");
            report.record_skipped(candidate);
            return None;
        }

        let mut base = candidate;
        if base.is_symlink(fs) {
            arrived_via = None;
            if scope.links.contains(&base) {
                log::debug!("recursive symlink {base}");
                return Some(finish(report, PathOutcome::RecursiveLink(base)));
            }

            let target = match fs.read_link(base.as_path()) {
                Ok(target) => target,
                Err(e) => {
                    log::debug!("cannot read symlink {base}: {e}");
                    return Some(finish(report, PathOutcome::BrokenLink(base)));
                }
            };
            let split = split_path(&target);
            let substituted = match split.root {
                Some(root) => PathEntity::new(root),
                None => match base.parent() {
                    Some(parent) => parent,
                    None => return Some(finish(report, PathOutcome::BrokenLink(base))),
                },
            };
            log::debug!("following {base} -> {}", target.display());

            scope.pending.push_segments(split.segments, Some(&base));
            scope.links.push(base);
            base = substituted;
        }

        if base.exists(fs) {
            match scope.pending.pop() {
                Some(next) => {
                    candidate = base.join(&next.segment);
                    arrived_via = next.link;
                    continue;
                }
                None => {
                    if hold_links {
                        scope.hold();
                    }
                    return Some(PathOutcome::Resolved(base));
                }
            }
        }

        let culprit =
            arrived_via.or_else(|| scope.pending.peek().and_then(|next| next.link.clone()));
        let outcome = match culprit {
            Some(link) => PathOutcome::BrokenLink(link),
            None => {
                let mut unresolved = base.into_path_buf();
                for segment in scope.pending.unresolved_tail(scope.pending_mark()) {
                    unresolved.push(segment);
                }
                PathOutcome::Missing(PathEntity::new(unresolved))
            }
        };
        log::debug!("{outcome}");
        return Some(finish(report, outcome));
    }
}

fn finish(report: &mut WalkReport, outcome: PathOutcome) -> PathOutcome {
    report.record_outcome(&outcome);
    outcome
}
