//! Run configuration.
//!
//! Everything the runner would otherwise read from the process (working
//! directory, shell override) is captured here once, in `main`, and passed
//! down explicitly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Shell used for multi-token commands when `SHELL` is unset.
const DEFAULT_SHELL: &str = "bash";

/// The only workspace parent directory that is listed on disk.
const DEFAULT_LISTED_PARENT: &str = "packages";

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository root holding the root `package.json`.
    pub root: PathBuf,
    /// Shell override for commands that need interpretation.
    pub shell: Option<String>,
    /// Parent directory expanded for `<parent>/*` patterns.
    pub listed_parent: String,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            shell: None,
            listed_parent: DEFAULT_LISTED_PARENT.to_string(),
        }
    }

    /// Create config from the current directory and `SHELL`.
    pub fn from_env() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to read current directory")?;
        let shell = std::env::var("SHELL").ok();
        Ok(Self::new(root).with_shell(shell))
    }

    pub fn with_shell(mut self, shell: Option<String>) -> Self {
        self.shell = shell;
        self
    }

    pub fn with_listed_parent(mut self, parent: impl Into<String>) -> Self {
        self.listed_parent = parent.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The shell program for [`crate::CommandForm::Shell`] commands.
    pub fn shell_program(&self) -> &str {
        match self.shell.as_deref() {
            Some(shell) if !shell.is_empty() => shell,
            _ => DEFAULT_SHELL,
        }
    }
}
