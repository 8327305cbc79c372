//! Configuration merging and precedence handling.
//!
//! Scalar fields from a higher-precedence source replace lower ones. Exclude
//! patterns accumulate across sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use symwalk::config::{Config, ConfigMerger};
///
/// let low = Config { strict: Some(false), ..Default::default() };
/// let high = Config { strict: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.strict, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if `Some`
    /// - Exclude patterns: appended, duplicates dropped
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.unique_paths.is_some() {
            target.unique_paths = source.unique_paths;
        }

        if source.expand_user.is_some() {
            target.expand_user = source.expand_user;
        }

        if source.strict.is_some() {
            target.strict = source.strict;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_exclude) = source.exclude {
            let target_exclude = target.exclude.get_or_insert_with(Vec::new);
            for pattern in source_exclude {
                if !target_exclude.contains(pattern) {
                    target_exclude.push(pattern.clone());
                }
            }
        }
    }
}
