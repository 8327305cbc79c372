//! Configuration system for symwalk.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `.symwalk.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of exclude patterns
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SYMWALK_*`)
//! 3. Project config (nearest `.symwalk.yaml`)
//! 4. User config (`~/.symwalk/config.yaml`)
//! 5. Built-in defaults
//!
//! Exclude patterns are the exception: they accumulate across every layer.
//!
//! # Examples
//!
//! ```no_run
//! use symwalk::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("excluding {:?}", config.exclude_patterns());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
