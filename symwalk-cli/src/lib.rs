//! Library exports for symwalk-cli.
//!
//! Exposes the CLI structure and command implementations so integration
//! tests and benches can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
