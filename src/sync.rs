//! The sync engine
//!
//! Walks every entry of the import map in document order, figures out what
//! version package.json (after catalog resolution) wants for it, and rewrites
//! the entry when the embedded version drifts. All document I/O happens at the
//! edges: both documents are read once up front and the import map is written
//! once at the end if anything changed.

use crate::catalog::resolve_range;
use crate::domain::{leading_version, ChangeRecord, ImportSpecifier, Precision, SyncResult};
use crate::error::SyncError;
use crate::manifest::{ImportMapDocument, PackageManifest};
use crate::package_manager::{LockfileProbe, PackageManagerProbe};
use std::path::Path;

/// Knobs for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// How many version segments to keep when rewriting
    pub precision: Precision,
    /// Evaluate and report, but never write the document
    pub dry_run: bool,
}

/// Reconciles an import map against a package manifest
pub struct SyncEngine {
    options: SyncOptions,
    probe: Box<dyn PackageManagerProbe>,
}

impl SyncEngine {
    /// Create an engine with the production lockfile probe
    pub fn new(options: SyncOptions) -> Self {
        Self::with_probe(options, Box::new(LockfileProbe::new()))
    }

    /// Create an engine with a custom package manager probe
    pub fn with_probe(options: SyncOptions, probe: Box<dyn PackageManagerProbe>) -> Self {
        Self { options, probe }
    }

    /// Run the sync: read both documents, reconcile, write back if needed
    ///
    /// Fatal errors can only arise from the two primary documents (missing or
    /// unparsable) and from the final write; every per-entry problem leaves
    /// that entry unchanged and the run continues.
    pub async fn sync(
        &self,
        import_map_path: &Path,
        manifest_path: &Path,
    ) -> Result<SyncResult, SyncError> {
        // Preconditions before any parsing
        if !import_map_path.is_file() {
            return Err(SyncError::import_map_not_found(import_map_path));
        }
        if !manifest_path.is_file() {
            return Err(SyncError::manifest_not_found(manifest_path));
        }

        let mut document = ImportMapDocument::load(import_map_path)?;
        let manifest = PackageManifest::load(manifest_path)?;
        let manifest_dir = manifest.dir();

        let mut planned: Vec<(String, String)> = Vec::new();
        let mut changes: Vec<ChangeRecord> = Vec::new();

        if let Some(imports) = document.imports() {
            for (alias, value) in imports {
                // Malformed documents must not abort the run
                let Some(raw) = value.as_str() else { continue };
                let Some(spec) = ImportSpecifier::parse(raw) else {
                    continue;
                };
                let Some(range) = manifest.declared_range(&spec.name) else {
                    continue;
                };
                let Some(resolved) =
                    resolve_range(range, &spec.name, &manifest_dir, self.probe.as_ref()).await
                else {
                    continue;
                };

                let candidate = leading_version(&resolved);
                // A range with no digits gives nothing to embed
                if candidate.is_empty() || candidate == spec.version {
                    continue;
                }

                let target = self.options.precision.apply(candidate, &spec.version);
                if target == spec.version {
                    continue;
                }

                planned.push((alias.clone(), spec.with_version(&target)));
                changes.push(ChangeRecord::new(spec.name, spec.version, target));
            }
        }

        for (alias, value) in planned {
            document.set_import(&alias, value);
        }

        let result = SyncResult::from_changes(changes);
        if result.changed && !self.options.dry_run {
            document.save()?;
        }
        Ok(result)
    }
}
