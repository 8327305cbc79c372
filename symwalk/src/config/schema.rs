//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered; the
//! `*_or_default` accessors supply the built-in defaults.

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use symwalk::config::{Config, OutputFormat};
///
/// let config = Config {
///     exclude: Some(vec!["*/.git".to_string()]),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert!(!config.unique_paths_or_default());
/// assert_eq!(config.exclude_patterns(), ["*/.git"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob patterns for paths to exclude from walks.
    pub exclude: Option<Vec<String>>,

    /// Suppress second visits to the same resolved path.
    pub unique_paths: Option<bool>,

    /// Expand a leading `~` in target paths.
    pub expand_user: Option<bool>,

    /// Treat a bad target path as an error.
    pub strict: Option<bool>,

    /// Output format for results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Exclude patterns, or an empty slice.
    #[must_use]
    pub fn exclude_patterns(&self) -> &[String] {
        self.exclude.as_deref().unwrap_or_default()
    }

    /// `unique_paths`, defaulting to `false`.
    #[must_use]
    pub fn unique_paths_or_default(&self) -> bool {
        self.unique_paths.unwrap_or(false)
    }

    /// `expand_user`, defaulting to `true`.
    #[must_use]
    pub fn expand_user_or_default(&self) -> bool {
        self.expand_user.unwrap_or(true)
    }

    /// `strict`, defaulting to `false`.
    #[must_use]
    pub fn strict_or_default(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// `output_format`, defaulting to [`OutputFormat::Text`].
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// How results are printed.
///
/// # Examples
///
/// ```
/// use symwalk::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One code-prefixed record per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format '{s}' (expected text or json)")),
        }
    }
}
