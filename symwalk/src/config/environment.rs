//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SYMWALK_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Comma-separated exclude patterns, added to those from files.
pub const EXCLUDE_ENV: &str = "SYMWALK_EXCLUDE";
/// Boolean override for `unique_paths`.
pub const UNIQUE_PATHS_ENV: &str = "SYMWALK_UNIQUE_PATHS";
/// Boolean override for `expand_user`.
pub const EXPAND_USER_ENV: &str = "SYMWALK_EXPAND_USER";
/// Boolean override for `strict`.
pub const STRICT_ENV: &str = "SYMWALK_STRICT";
/// Override for `output_format` (`text` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "SYMWALK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use symwalk::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g. an unparseable boolean or unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(EXCLUDE_ENV) {
            let patterns = Self::parse_list(&val);
            if !patterns.is_empty() {
                config.exclude.get_or_insert_with(Vec::new).extend(patterns);
            }
        }

        if let Ok(val) = env::var(UNIQUE_PATHS_ENV) {
            config.unique_paths = Some(Self::parse_bool(UNIQUE_PATHS_ENV, &val)?);
        }

        if let Ok(val) = env::var(EXPAND_USER_ENV) {
            config.expand_user = Some(Self::parse_bool(EXPAND_USER_ENV, &val)?);
        }

        if let Ok(val) = env::var(STRICT_ENV) {
            config.strict = Some(Self::parse_bool(STRICT_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format = val.parse::<OutputFormat>().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    /// Parse a boolean from environment variable.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, dropping blank items.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
