use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{read_manifest, ManifestError};

/// A workspace package manifest.
///
/// Held only for the duration of one dispatch step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Declared package name. Filtering compares against this exactly.
    pub name: Option<String>,
    /// Script name to shell command string. Non-string entries are kept
    /// so they don't spoil the rest of the manifest, but never run.
    #[serde(default)]
    pub scripts: BTreeMap<String, Value>,
}

impl PackageManifest {
    /// Load `<dir>/package.json`.
    pub fn load(dir: &Path) -> Result<Self, ManifestError> {
        read_manifest(dir)
    }

    /// The command for `script`. An empty or non-string command counts as undefined.
    pub fn script(&self, script: &str) -> Option<&str> {
        self.scripts
            .get(script)
            .and_then(Value::as_str)
            .filter(|command| !command.is_empty())
    }

    /// Whether this package passes the optional package-name filter.
    pub fn matches_filter(&self, filter: Option<&str>) -> bool {
        match filter {
            Some(wanted) => self.name.as_deref() == Some(wanted),
            None => true,
        }
    }

    /// Name used in announcements and errors; falls back to the directory name.
    pub fn display_name(&self, dir: &Path) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PackageManifest {
        serde_json::from_str(json).expect("valid manifest")
    }

    #[test]
    fn test_missing_scripts_is_empty() {
        let manifest = parse(r#"{"name": "web", "version": "1.0.0"}"#);
        assert!(manifest.scripts.is_empty());
        assert_eq!(manifest.script("build"), None);
    }

    #[test]
    fn test_empty_command_is_undefined() {
        let manifest = parse(r#"{"name": "web", "scripts": {"build": "", "test": "vitest"}}"#);
        assert_eq!(manifest.script("build"), None);
        assert_eq!(manifest.script("test"), Some("vitest"));
    }

    #[test]
    fn test_non_string_script_does_not_spoil_manifest() {
        let manifest = parse(r#"{"name": "web", "scripts": {"build": "tsc", "x": 1, "y": null}}"#);
        assert_eq!(manifest.script("build"), Some("tsc"));
        assert_eq!(manifest.script("x"), None);
        assert_eq!(manifest.script("y"), None);
    }

    #[test]
    fn test_filter_is_exact() {
        let manifest = parse(r#"{"name": "@acme/web"}"#);
        assert!(manifest.matches_filter(None));
        assert!(manifest.matches_filter(Some("@acme/web")));
        assert!(!manifest.matches_filter(Some("@acme/Web")));
        assert!(!manifest.matches_filter(Some("web")));
    }

    #[test]
    fn test_unnamed_package_never_matches_filter() {
        let manifest = parse(r#"{"scripts": {"build": "make"}}"#);
        assert!(!manifest.matches_filter(Some("")));
        assert_eq!(manifest.display_name(Path::new("packages/tools")), "tools");
    }
}
