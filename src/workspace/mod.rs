//! Workspace pattern matching.
//!
//! Two pattern forms are understood:
//!
//! - `<parent>/*`: any immediate child of `parent`.
//! - anything else: that exact relative path.
//!
//! Only the configured parent ([`RunConfig::listed_parent`], `packages` by
//! default) is ever listed on disk. Other `<parent>/*` patterns and literal
//! paths still get a matching rule but expand to nothing. Recursive
//! wildcards, bracket classes and negation are not supported.

use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::error::RunError;

const WILDCARD_SUFFIX: &str = "/*";

/// A parsed workspace glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspacePattern {
    /// `<parent>/*`
    Children { parent: String },
    /// An exact relative path.
    Literal(String),
}

impl WorkspacePattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix(WILDCARD_SUFFIX) {
            Some(parent) => Self::Children {
                parent: parent.to_string(),
            },
            None => Self::Literal(pattern.to_string()),
        }
    }

    /// Whether a root-relative path satisfies this pattern.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Children { parent } => {
                path.parent() == Some(Path::new(parent))
                    && path.file_name().is_some_and(|name| !name.is_empty())
            }
            Self::Literal(literal) => path == Path::new(literal),
        }
    }

    /// The parent this pattern lists, if it is the wired one.
    fn listed_parent<'a>(&'a self, config: &RunConfig) -> Option<&'a str> {
        match self {
            Self::Children { parent } if *parent == config.listed_parent => Some(parent.as_str()),
            _ => None,
        }
    }
}

/// Expand `patterns` into root-relative workspace directories.
///
/// Results follow directory listing order within each pattern. Every entry
/// returned was a directory when it was listed.
pub fn match_workspaces(
    config: &RunConfig,
    patterns: &[String],
) -> Result<Vec<PathBuf>, RunError> {
    let mut matched = Vec::new();

    for raw in patterns {
        let pattern = WorkspacePattern::parse(raw);
        let Some(parent) = pattern.listed_parent(config) else {
            tracing::debug!("Workspace pattern {:?} is not expanded", raw);
            continue;
        };

        let listing_dir = config.root().join(parent);
        let entries = std::fs::read_dir(&listing_dir).map_err(|source| RunError::ListDir {
            path: listing_dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| RunError::ListDir {
                path: listing_dir.clone(),
                source,
            })?;
            let relative = Path::new(parent).join(entry.file_name());
            if !pattern.matches(&relative) {
                continue;
            }
            // Follows symlinks, so a linked package directory counts.
            let is_dir = std::fs::metadata(entry.path())
                .map(|meta| meta.is_dir())
                .unwrap_or(false);
            if is_dir {
                matched.push(relative);
            }
        }
    }

    tracing::debug!("Matched {} workspace directories", matched.len());
    Ok(matched)
}
