//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ListCommand, PathCommand, TreeCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve paths and walk directory trees through symlinks without looping.
#[derive(Parser)]
#[command(name = "symwalk")]
#[command(
    version,
    about = "Resolve paths and walk directory trees through symlinks",
    long_about = "Follow symlinks without risking infinite recursion. Every record \
                  printed is a code followed by an absolute path: 'd' directory, \
                  'f' anything else, 'x' excluded, 'u<N>' path met N times, \
                  'r' recursive link, 'b' broken link, 'm' missing path."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read user configuration from this file instead of ~/.symwalk/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "SYMWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve each target to its physical path
    Path(PathCommand),

    /// List the immediate members of each target directory
    List(ListCommand),

    /// Walk the whole tree under each target
    Tree(TreeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
