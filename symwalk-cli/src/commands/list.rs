//! List command implementation.
//!
//! Lists the immediate members of each target directory, with symlinked
//! members resolved. A target that is not a directory lists nothing.

use crate::commands::{run_walk, Reach, WalkArgs};
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// List the immediate members of each target directory.
#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub walk: WalkArgs,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        run_walk(&self.walk, global, Reach::Members)
    }
}
