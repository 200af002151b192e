//! `package.json` manifests.
//!
//! - [`RootManifest`]: the repository root manifest, read once at startup.
//!   Failing to read it is fatal.
//! - [`PackageManifest`]: one per matched workspace directory, read lazily
//!   when dispatch reaches that directory. Failing to read it only excludes
//!   that directory.

mod package;
mod root;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use package::*;
pub use root::*;

/// File name of every manifest, root or package.
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the manifest inside `dir`.
fn read_manifest<T: DeserializeOwned>(dir: &Path) -> Result<T, ManifestError> {
    let path = dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ManifestError::Parse { path, source })
}
