//! Read-only view of package.json
//!
//! The sync engine only ever needs one question answered: what range does the
//! manifest declare for a package? `devDependencies` wins over `dependencies`
//! when both sections declare it.

use crate::error::SyncError;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A parsed package.json, read once per sync run
#[derive(Debug)]
pub struct PackageManifest {
    path: PathBuf,
    json: Value,
}

impl PackageManifest {
    /// Load and parse the manifest at the given path
    ///
    /// A missing file or unparsable content is fatal: this is a primary input,
    /// not a best-effort one.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        if !path.is_file() {
            return Err(SyncError::manifest_not_found(path));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| SyncError::read_error(path, e))?;
        let json: Value = serde_json::from_str(&content)
            .map_err(|e| SyncError::json_parse_error(path, e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            json,
        })
    }

    /// Build a manifest from already-parsed JSON (tests)
    #[cfg(test)]
    pub fn from_value(path: impl Into<PathBuf>, json: Value) -> Self {
        Self {
            path: path.into(),
            json,
        }
    }

    /// Path this manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest, canonicalized when possible
    ///
    /// This is the starting point for the upward workspace-root walk, so a
    /// relative `./package.json` must not cut the walk short.
    pub fn dir(&self) -> PathBuf {
        let dir = match self.path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        std::fs::canonicalize(&dir).unwrap_or(dir)
    }

    /// The declared range for a package, devDependencies first
    pub fn declared_range(&self, package: &str) -> Option<&str> {
        for section in ["devDependencies", "dependencies"] {
            if let Some(range) = self
                .json
                .get(section)
                .and_then(|deps| deps.get(package))
                .and_then(Value::as_str)
            {
                return Some(range);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(json: Value) -> PackageManifest {
        PackageManifest::from_value("package.json", json)
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"dependencies": {"zod": "^3.22.0"}}"#).unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.declared_range("zod"), Some("^3.22.0"));
        assert_eq!(manifest.path(), path);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::ManifestNotFound { .. }));
        assert!(format!("{}", err).contains("package.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "not json").unwrap();

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::JsonParseError { .. }));
    }

    #[test]
    fn test_declared_range_dependencies() {
        let m = manifest(json!({"dependencies": {"lodash": "^4.17.21"}}));
        assert_eq!(m.declared_range("lodash"), Some("^4.17.21"));
    }

    #[test]
    fn test_declared_range_dev_dependencies() {
        let m = manifest(json!({"devDependencies": {"typescript": "~5.6.0"}}));
        assert_eq!(m.declared_range("typescript"), Some("~5.6.0"));
    }

    #[test]
    fn test_declared_range_dev_wins_over_regular() {
        let m = manifest(json!({
            "dependencies": {"zod": "^3.21.0"},
            "devDependencies": {"zod": "^3.22.0"}
        }));
        assert_eq!(m.declared_range("zod"), Some("^3.22.0"));
    }

    #[test]
    fn test_declared_range_absent() {
        let m = manifest(json!({"dependencies": {"zod": "^3.22.0"}}));
        assert_eq!(m.declared_range("lodash"), None);
    }

    #[test]
    fn test_declared_range_no_sections() {
        let m = manifest(json!({"name": "demo"}));
        assert_eq!(m.declared_range("zod"), None);
    }

    #[test]
    fn test_declared_range_non_string_value() {
        let m = manifest(json!({"dependencies": {"zod": 3}}));
        assert_eq!(m.declared_range("zod"), None);
    }

    #[test]
    fn test_declared_range_scoped_package() {
        let m = manifest(json!({"dependencies": {"@std/assert": "^1.0.0"}}));
        assert_eq!(m.declared_range("@std/assert"), Some("^1.0.0"));
    }

    #[test]
    fn test_dir_of_relative_path() {
        let m = manifest(json!({}));
        // "package.json" has an empty parent; the walk must start at "." not ""
        assert!(!m.dir().as_os_str().is_empty());
    }
}
