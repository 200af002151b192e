//! Script dispatch.
//!
//! Runs one script across the matched workspace directories, strictly one
//! child process at a time. The first failing child stops the run.

mod command;

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::RunError;
use crate::manifest::PackageManifest;

pub use command::CommandForm;

/// What the user asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub script: String,
    /// Only run in the package whose declared `name` equals this.
    pub filter: Option<String>,
}

impl Invocation {
    /// An empty filter means no filter.
    pub fn new(script: impl Into<String>, filter: Option<String>) -> Self {
        Self {
            script: script.into(),
            filter: filter.filter(|name| !name.is_empty()),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Packages whose script ran and exited zero, in run order.
    pub ran: Vec<String>,
}

pub struct Dispatcher<'a> {
    config: &'a RunConfig,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Run `invocation` in each of `dirs` (root-relative), in order.
    pub async fn run(
        &self,
        dirs: &[PathBuf],
        invocation: &Invocation,
    ) -> Result<DispatchReport, RunError> {
        let mut report = DispatchReport::default();
        let script = invocation.script.as_str();

        for relative in dirs {
            let dir = self.config.root().join(relative);

            let manifest = match PackageManifest::load(&dir) {
                Ok(manifest) => manifest,
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", relative.display(), e);
                    continue;
                }
            };

            if !manifest.matches_filter(invocation.filter.as_deref()) {
                continue;
            }
            let Some(command_line) = manifest.script(script) else {
                tracing::debug!("{} has no {} script", relative.display(), script);
                continue;
            };

            let package = manifest.display_name(&dir);
            println!("\n› {} :: {}", package, script);
            tracing::info!(
                "Running {} in {} ({:?})",
                script,
                relative.display(),
                CommandForm::classify(command_line)
            );

            let status = command::build(command_line, &dir, self.config.shell_program())
                .status()
                .await
                .map_err(|source| RunError::Spawn {
                    package: package.clone(),
                    script: script.to_string(),
                    source,
                })?;

            if !status.success() {
                return Err(RunError::ScriptFailed {
                    package,
                    script: script.to_string(),
                    code: status.code(),
                });
            }
            report.ran.push(package);
        }

        Ok(report)
    }
}
