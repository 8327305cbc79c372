//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, target defaulting and walker construction.

use crate::error::CliError;
use std::env;
use std::path::PathBuf;
use symwalk::{Config, ConfigBuilder, ExcludeFilter, SymlinkWalk};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit user configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. Project file (`.symwalk.yaml`), then user file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, flags: Config) -> Result<Config, CliError> {
    let working_dir = env::current_dir()?;
    let mut builder = ConfigBuilder::new()
        .with_working_dir(&working_dir)
        .with_config(flags);
    if let Some(ref path) = global.config {
        builder = builder.with_user_config(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The targets to operate on: the given paths, or the working directory.
pub fn resolve_targets(targets: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    if targets.is_empty() {
        Ok(vec![env::current_dir()?])
    } else {
        Ok(targets.to_vec())
    }
}

/// Build a walker from the merged configuration.
pub fn make_walker(config: &Config) -> Result<SymlinkWalk, CliError> {
    let filter = ExcludeFilter::new(config.exclude_patterns().iter().cloned())
        .map_err(|e| CliError::Config(e.to_string()))?;
    let mut walker = SymlinkWalk::new()
        .with_unique_paths(config.unique_paths_or_default())
        .with_expand_user(config.expand_user_or_default());
    if !filter.is_empty() {
        log::debug!("excluding paths matching {:?}", filter.patterns());
        walker = walker.with_filter(filter.into_predicate());
    }
    Ok(walker)
}
