//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated test environment with its own tree and user config
//! - Command builder helpers
//! - Output parsing helpers

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_VARS: [&str; 7] = [
    "SYMWALK_CONFIG",
    "SYMWALK_EXCLUDE",
    "SYMWALK_UNIQUE_PATHS",
    "SYMWALK_EXPAND_USER",
    "SYMWALK_STRICT",
    "SYMWALK_OUTPUT_FORMAT",
    "SYMWALK_LOG_MODE",
];

/// Test environment with an isolated tree and configuration.
///
/// - `root` is a canonical temporary directory the commands run in
/// - `user_config` is an empty file passed as `--config`, so the real
///   `~/.symwalk/config.yaml` is never read
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical root of the test tree
    pub root: PathBuf,
    /// Path to the user configuration file
    pub user_config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        let root = base.join("tree");
        fs::create_dir(&root).expect("Failed to create tree root");
        let user_config = base.join("user-config.yaml");
        fs::write(&user_config, "").expect("Failed to write user config");

        Self {
            temp_dir,
            root,
            user_config,
        }
    }

    /// Get a bare command builder: the binary, run in `root`, with no
    /// SYMWALK_* variables and no `--config`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("symwalk").expect("Failed to find symwalk binary");
        cmd.current_dir(&self.root);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the isolated user config.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.user_config);
        cmd
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Create a directory (and its parents).
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("Failed to create test directory");
        self
    }

    /// Create a file (and its parent directories).
    pub fn file(&self, rel: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, rel).expect("Failed to write test file");
        self
    }

    /// Create a symlink at `rel` storing `target` verbatim.
    #[cfg(unix)]
    pub fn symlink(&self, rel: &str, target: impl AsRef<Path>) -> &Self {
        std::os::unix::fs::symlink(target, self.path(rel)).expect("Failed to create symlink");
        self
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, content: &str) {
        fs::write(&self.user_config, content).expect("Failed to write user config");
    }

    /// Write a project configuration file at the tree root.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.path(".symwalk.yaml"), content).expect("Failed to write project config");
    }

    /// Run a command that must succeed and return its records, with paths
    /// made relative to the tree root.
    pub fn records(&self, args: &[&str]) -> Vec<(String, String)> {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run symwalk");
        assert!(
            output.status.success(),
            "symwalk {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_records(&self.root, &String::from_utf8(output.stdout).expect("Invalid UTF-8"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text output into `(code, relative path)` pairs.
#[allow(dead_code)]
pub fn parse_records(root: &Path, output: &str) -> Vec<(String, String)> {
    output
        .lines()
        .map(|line| {
            let (code, path) = line.split_once(' ').expect("record has a code and a path");
            (code.to_string(), relative(root, Path::new(path)))
        })
        .collect()
}

/// `path` relative to `root`, with `.` for the root itself.
#[allow(dead_code)]
pub fn relative(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Owned `(code, path)` pairs from string literals.
#[allow(dead_code)]
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(c, p)| ((*c).to_string(), (*p).to_string()))
        .collect()
}

/// Sort records for order-insensitive comparison.
#[allow(dead_code)]
pub fn sorted(mut records: Vec<(String, String)>) -> Vec<(String, String)> {
    records.sort();
    records
}
