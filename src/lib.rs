//! Workspace script runner.
//!
//! Locates the packages of a monorepo that declare a `package.json` script
//! and runs it, for one named package or sequentially for all of them.
//!
//! The pipeline is strictly linear:
//!
//! - [`manifest`]: reads the root manifest and per-package manifests.
//! - [`workspace`]: expands the declared workspace patterns into directories.
//! - [`dispatch`]: runs the requested script in each matching package.
//!
//! All ambient process state is captured once in a [`RunConfig`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod manifest;
pub mod workspace;

pub use config::RunConfig;
pub use dispatch::{CommandForm, DispatchReport, Dispatcher, Invocation};
pub use error::RunError;
pub use manifest::{ManifestError, PackageManifest, RootManifest};
pub use workspace::{match_workspaces, WorkspacePattern};
