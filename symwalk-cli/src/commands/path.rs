//! Path command implementation.
//!
//! Resolves each target to a physical path, following every symlink on the
//! way. Exclude patterns and uniqueness do not apply to single paths.

use crate::commands::TargetArgs;
use crate::error::CliError;
use crate::output::{Record, RecordWriter};
use crate::utils::{load_configuration, resolve_targets, GlobalOptions};
use clap::Args;
use std::io;
use symwalk::{ResolveOptions, SymlinkWalk};

/// Resolve each target to its physical path.
#[derive(Args)]
pub struct PathCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl PathCommand {
    /// Execute the path command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, self.target.overrides())?;
        let targets = resolve_targets(&self.target.targets)?;
        let options = ResolveOptions {
            expand_user: config.expand_user_or_default(),
            strict: false,
        };

        let walker = SymlinkWalk::new();
        let stdout = io::stdout();
        let mut out = RecordWriter::new(stdout.lock(), config.output_format_or_default());
        let mut unresolved = 0usize;
        for target in &targets {
            let outcome = walker.resolve_path(target, options)?;
            log::debug!("{} -> {outcome}", target.display());
            if outcome.is_bad_path() {
                unresolved += 1;
            }
            out.write(&Record::outcome(&outcome))?;
        }
        out.finish()?;

        if config.strict_or_default() && unresolved > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{unresolved} target(s) could not be resolved"
            )));
        }
        Ok(())
    }
}
