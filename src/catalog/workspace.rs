//! pnpm workspace catalog document
//!
//! `pnpm-workspace.yaml` can declare a flat default catalog and any number of
//! named catalogs:
//!
//! ```yaml
//! catalog:
//!   zod: ^3.22.0
//! catalogs:
//!   react18:
//!     react: ^18.3.0
//! ```
//!
//! Everything here is best-effort: a missing or unparsable document resolves to
//! None, never an error. The document is re-read per resolution and never
//! cached across runs.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File that marks a pnpm workspace root and carries its catalogs
pub const WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// Parsed catalog sections of a pnpm-workspace.yaml document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceCatalog {
    /// The default (unnamed) catalog: package → range
    #[serde(default)]
    pub catalog: HashMap<String, String>,
    /// Named catalogs: catalog name → package → range
    #[serde(default)]
    pub catalogs: HashMap<String, HashMap<String, String>>,
}

impl WorkspaceCatalog {
    /// Read and parse the catalog document at a workspace root
    ///
    /// Absent or unparsable documents are a miss, not an error: without a
    /// catalog there is simply nothing to resolve against.
    pub fn load(workspace_root: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(workspace_root.join(WORKSPACE_FILE)).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    /// Look up a package's range in the default or a named catalog
    pub fn resolve(&self, package: &str, catalog_name: &str) -> Option<&str> {
        if catalog_name == super::DEFAULT_CATALOG {
            self.catalog.get(package).map(String::as_str)
        } else {
            self.catalogs
                .get(catalog_name)?
                .get(package)
                .map(String::as_str)
        }
    }
}

/// Walk parent directories from `start` looking for the workspace document
///
/// Returns the first directory containing `pnpm-workspace.yaml`, or None once
/// the filesystem root is passed. Unreadable levels count as "not found there";
/// the walk itself never fails.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(WORKSPACE_FILE).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
