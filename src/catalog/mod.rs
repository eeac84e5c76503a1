//! Catalog reference resolution
//!
//! pnpm lets a package.json range point at a workspace-level catalog instead of
//! stating the range inline: `"zod": "catalog:"` (default catalog) or
//! `"react": "catalog:react18"` (named catalog). This module turns such a
//! reference back into the concrete range string declared in
//! pnpm-workspace.yaml.
//!
//! Every failure on this path is a None, never an error. An unresolvable
//! reference just means the corresponding import entry is left alone.

mod workspace;

pub use workspace::{find_workspace_root, WorkspaceCatalog, WORKSPACE_FILE};

use crate::package_manager::PackageManagerProbe;
use std::path::Path;

/// Marker prefix of a catalog reference range
pub const CATALOG_MARKER: &str = "catalog:";

/// Sentinel name for the unnamed catalog
pub const DEFAULT_CATALOG: &str = "default";

/// A parsed `catalog:` range token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReference {
    /// Catalog name; `default` when the marker has no trailing name
    pub name: String,
}

impl CatalogReference {
    /// Parse a range string as a catalog reference
    ///
    /// Returns None unless the range starts with the literal `catalog:`. The
    /// trailing name is trimmed; empty maps to the default catalog.
    pub fn parse(range: &str) -> Option<Self> {
        let rest = range.strip_prefix(CATALOG_MARKER)?;
        let name = rest.trim();
        Some(CatalogReference {
            name: if name.is_empty() {
                DEFAULT_CATALOG.to_string()
            } else {
                name.to_string()
            },
        })
    }
}

/// Resolve a manifest range, following catalog indirection if present
///
/// A plain range passes through unchanged. A catalog reference resolves only
/// when the workspace is owned by pnpm (catalogs are a pnpm feature); any other
/// detection result fails the resolution. The workspace root is located by
/// walking up from `start_dir`, normally the manifest's directory.
pub async fn resolve_range(
    range: &str,
    package: &str,
    start_dir: &Path,
    probe: &dyn PackageManagerProbe,
) -> Option<String> {
    let Some(reference) = CatalogReference::parse(range) else {
        return Some(range.to_string());
    };

    let root = find_workspace_root(start_dir)?;

    match probe.detect(&root).await {
        Some(pm) if pm.supports_catalogs() => {}
        _ => return None,
    }

    let doc = WorkspaceCatalog::load(&root)?;
    doc.resolve(package, &reference.name).map(str::to_string)
}
