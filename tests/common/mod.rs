//! Synthetic monorepos for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;
use workspace_run::RunConfig;

/// Log file that test scripts append to, relative to a package directory.
pub const LOG_FROM_PACKAGE: &str = "../../run.log";

pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// A repo whose root manifest declares `workspaces`.
    pub fn new(workspaces: &[&str]) -> Self {
        let repo = Self::empty();
        repo.write("package.json", &json!({ "private": true, "workspaces": workspaces }));
        repo
    }

    /// A repo with no root manifest at all.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> RunConfig {
        RunConfig::new(self.root()).with_shell(Some("sh".to_string()))
    }

    pub fn write(&self, relative: &str, value: &Value) -> PathBuf {
        self.write_raw(relative, &serde_json::to_string_pretty(value).expect("serialize"))
    }

    pub fn write_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// `packages/<dir>/package.json` with a name and scripts.
    pub fn package(&self, dir: &str, name: &str, scripts: Value) -> PathBuf {
        self.write(
            &format!("packages/{}/package.json", dir),
            &json!({ "name": name, "version": "0.0.0", "scripts": scripts }),
        );
        self.root().join("packages").join(dir)
    }

    /// Lines appended to the shared log by test scripts.
    pub fn log(&self) -> Vec<String> {
        fs::read_to_string(self.root().join("run.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// A shell command that appends `line` to the shared log.
pub fn log_line(line: &str) -> String {
    format!("echo {} >> {}", line, LOG_FROM_PACKAGE)
}
