//! Import map document handling
//!
//! The deno.json document is parsed once with key order preserved and written
//! back at most once per run, only when something actually changed. Persisted
//! form is two-space indented JSON with a single trailing newline.

use crate::error::SyncError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// The deno.json document with its `imports` mapping
#[derive(Debug)]
pub struct ImportMapDocument {
    path: PathBuf,
    root: Value,
}

impl ImportMapDocument {
    /// Load and parse the import map at the given path
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        if !path.is_file() {
            return Err(SyncError::import_map_not_found(path));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| SyncError::read_error(path, e))?;
        let root: Value = serde_json::from_str(&content)
            .map_err(|e| SyncError::json_parse_error(path, e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Path this document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `imports` mapping, in document order
    ///
    /// A document without an `imports` object simply has nothing to sync.
    pub fn imports(&self) -> Option<&Map<String, Value>> {
        self.root.get("imports").and_then(Value::as_object)
    }

    /// Replace the value of an existing import entry, keeping its position
    pub fn set_import(&mut self, alias: &str, value: String) {
        if let Some(imports) = self.root.get_mut("imports").and_then(Value::as_object_mut) {
            imports.insert(alias.to_string(), Value::String(value));
        }
    }

    /// Serialized form: two-space indentation, single trailing newline
    pub fn to_pretty_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.root)
            .unwrap_or_else(|_| self.root.to_string());
        out.push('\n');
        out
    }

    /// Persist the document back to its original path
    pub fn save(&self) -> Result<(), SyncError> {
        std::fs::write(&self.path, self.to_pretty_string())
            .map_err(|e| SyncError::write_error(&self.path, e))
    }
}
