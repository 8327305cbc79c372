//! Path values and lexical helpers.
//!
//! # Key Concepts
//!
//! ## Entities
//!
//! [`PathEntity`] is the one path type the walker deals in. It may come from a
//! string, a `Path`, or a directory scan; in the last case it remembers the
//! entry's file type so type and existence checks cost nothing.
//!
//! ## Outcomes
//!
//! [`PathOutcome`] says how resolving a single path ended: resolved, missing,
//! a broken symlink, or a recursive symlink. Callers branch on the variant.
//!
//! ## Normalization
//!
//! The [`normalize`] helpers expand `~`, split a path into root and segments,
//! and collapse a trailing `..`. They are purely lexical; the engine only
//! applies them to prefixes that are already physically resolved.
//!
//! # Examples
//!
//! ```
//! use symwalk::path::{PathEntity, PathOutcome};
//!
//! let outcome = PathOutcome::Missing(PathEntity::from("/no/such/dir"));
//! assert!(outcome.is_bad_path());
//! assert!(!outcome.is_bad_link());
//! ```

mod entity;
pub mod normalize;
mod outcome;

pub use entity::{EntryKind, PathEntity};
pub use outcome::PathOutcome;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
