//! CLI command implementations.
//!
//! - `path`: Resolve each target to its physical path
//! - `list`: List the immediate members of each target directory
//! - `tree`: Walk the whole tree under each target
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod list;
pub mod path;
pub mod tree;

pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use path::PathCommand;
pub use tree::TreeCommand;

use crate::error::CliError;
use crate::output::{Record, RecordWriter};
use crate::utils::{load_configuration, make_walker, resolve_targets, GlobalOptions};
use clap::Args;
use std::io;
use std::path::PathBuf;
use symwalk::{Config, OutputFormat};

/// Options shared by every command that takes targets.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Files or directories to operate on (default: the working directory)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<PathBuf>,

    /// Fail with exit code 1 if any missing path or bad link is found
    #[arg(long)]
    pub strict: bool,

    /// Treat a leading `~` literally instead of expanding it
    #[arg(long)]
    pub no_expand_user: bool,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl TargetArgs {
    /// Configuration layer for the flags given on the command line.
    pub fn overrides(&self) -> Config {
        Config {
            strict: self.strict.then_some(true),
            expand_user: self.no_expand_user.then_some(false),
            output_format: self.format,
            ..Default::default()
        }
    }
}

/// Options for the walking commands.
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Glob pattern of paths not to explore; may be repeated
    #[arg(short = 'x', long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// List each path at most once; repeats are reported as `u<N>` records
    #[arg(short = 'u', long)]
    pub unique_paths: bool,
}

impl WalkArgs {
    /// Configuration layer for the flags given on the command line.
    pub fn overrides(&self) -> Config {
        Config {
            exclude: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
            unique_paths: self.unique_paths.then_some(true),
            ..self.target.overrides()
        }
    }
}

/// How far a walk reaches below each target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reach {
    /// Immediate members only.
    Members,
    /// The whole subtree.
    Subtree,
}

/// Walk every target, printing its entries and then its report.
///
/// Each target gets a fresh report, so duplicates are counted per target.
pub(crate) fn run_walk(
    args: &WalkArgs,
    global: &GlobalOptions,
    reach: Reach,
) -> Result<(), CliError> {
    let config = load_configuration(global, args.overrides())?;
    let targets = resolve_targets(&args.target.targets)?;
    let mut walker = make_walker(&config)?;
    let stdout = io::stdout();
    let mut out = RecordWriter::new(stdout.lock(), config.output_format_or_default());
    let mut problems = 0usize;

    for target in &targets {
        log::info!("walking {}", target.display());
        let mut session = walker.session();
        let walk = match reach {
            Reach::Members => session.iter_dir(target)?,
            Reach::Subtree => session.iter_tree(target)?,
        };
        for item in walk {
            match item {
                Ok(entity) => out.write(&Record::entry(&entity))?,
                Err(e) => {
                    log::warn!("{e}");
                    problems += 1;
                }
            }
        }

        let report = session.report();
        problems += report.missing().len()
            + report.broken_links().len()
            + report.recursive_links().len();
        out.write_report(report)?;
    }
    out.finish()?;

    if config.strict_or_default() && problems > 0 {
        return Err(CliError::SemanticFailure(format!(
            "{problems} bad path(s) found"
        )));
    }
    Ok(())
}
