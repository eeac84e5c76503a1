//! Application error types using thiserror
//!
//! Only the two primary documents (the import map and package.json) can produce
//! errors. Everything on the catalog-resolution path is best-effort and reports
//! misses as `None` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing, or writing the primary documents
#[derive(Error, Debug)]
pub enum SyncError {
    /// Import map document not found
    #[error("import map not found: {path}")]
    ImportMapNotFound { path: PathBuf },

    /// Package manifest not found
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to read a primary document
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the import map back
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error in a primary document
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

impl SyncError {
    /// Creates a new ImportMapNotFound error
    pub fn import_map_not_found(path: impl Into<PathBuf>) -> Self {
        SyncError::ImportMapNotFound { path: path.into() }
    }

    /// Creates a new ManifestNotFound error
    pub fn manifest_not_found(path: impl Into<PathBuf>) -> Self {
        SyncError::ManifestNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SyncError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
