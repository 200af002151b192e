use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::{read_manifest, MANIFEST_FILE};
use crate::error::RunError;

/// The repository root manifest.
///
/// Only `workspaces` is read; every other field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RootManifest {
    /// Workspace glob patterns, in declaration order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub workspaces: Vec<String>,
}

/// `"workspaces": null` reads the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RootManifest {
    /// Load `<root>/package.json`. A missing or malformed file aborts the run.
    pub fn load(root: &Path) -> Result<Self, RunError> {
        let manifest: Self = read_manifest(root).map_err(|source| RunError::RootManifest {
            path: root.join(MANIFEST_FILE),
            source,
        })?;
        tracing::debug!(
            "Loaded root manifest with {} workspace pattern(s)",
            manifest.workspaces.len()
        );
        Ok(manifest)
    }
}
