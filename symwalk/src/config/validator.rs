//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::filter::ExcludeFilter;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use symwalk::config::{Config, ConfigValidator};
///
/// let config = Config {
///     exclude: Some(vec!["*/.git".to_string()]),
///     ..Default::default()
/// };
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is blank or does not compile.
    pub fn validate(config: &Config) -> Result<()> {
        for pattern in config.exclude_patterns() {
            Self::validate_pattern(pattern)?;
        }
        Ok(())
    }

    fn validate_pattern(pattern: &str) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(Error::Validation {
                field: "exclude".into(),
                message: "Exclude patterns cannot be empty".into(),
            });
        }
        ExcludeFilter::check(pattern)
    }
}
