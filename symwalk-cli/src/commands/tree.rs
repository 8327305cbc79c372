//! Tree command implementation.
//!
//! Walks everything reachable under each target in depth-first pre-order,
//! entering symlinked directories but never looping through them.

use crate::commands::{run_walk, Reach, WalkArgs};
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Walk the whole tree under each target.
#[derive(Args)]
pub struct TreeCommand {
    #[command(flatten)]
    pub walk: WalkArgs,
}

impl TreeCommand {
    /// Execute the tree command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        run_walk(&self.walk, global, Reach::Subtree)
    }
}
