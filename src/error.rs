use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::ManifestError;

/// Fatal runner errors. Each one ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to load root manifest {}: {source}", path.display())]
    RootManifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    #[error("Failed to list workspace directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{package} script {script} could not be started: {source}")]
    Spawn {
        package: String,
        script: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{package} script {script} failed ({})", exit_label(*code))]
    ScriptFailed {
        package: String,
        script: String,
        /// `None` when the child was killed by a signal.
        code: Option<i32>,
    },
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}
