#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # symwalk
//!
//! Symlink-safe path resolution and directory traversal.
//!
//! Paths are resolved one segment at a time with every symlink target spliced
//! in as it is met, so the walker never loops on a cycle and can tell a
//! missing path from a broken link from a link that re-enters itself.
//!
//! ## Core Types
//!
//! - [`PathEntity`] and [`PathOutcome`]: path values and how resolving one ended
//! - [`SymlinkWalk`] and [`Walk`]: the traversal driver and its lazy sequences
//! - [`WalkReport`]: everything a walk recorded instead of yielding
//! - [`FileSystem`]: the system calls the engine needs, with [`StdFileSystem`]
//! - [`ExcludeFilter`]: glob-based exclusion
//! - [`Config`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use symwalk::{resolve_path, PathOutcome, ResolveOptions};
//!
//! let outcome = resolve_path("/", ResolveOptions::default()).unwrap();
//! assert!(matches!(outcome, PathOutcome::Resolved(_)));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod fs;
pub mod logging;
pub mod path;
pub mod walk;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use filter::ExcludeFilter;
pub use fs::{FileSystem, StdFileSystem};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{EntryKind, PathEntity, PathOutcome};
pub use walk::{resolve_path, ResolveOptions, Session, SymlinkWalk, Walk, WalkReport};
