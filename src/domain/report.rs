//! Sync result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rewritten import entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Package name as embedded in the specifier
    pub name: String,
    /// Version that was embedded before the rewrite
    pub old_version: String,
    /// Version written by the rewrite
    pub new_version: String,
}

impl ChangeRecord {
    /// Creates a new ChangeRecord
    pub fn new(
        name: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.name, self.old_version, self.new_version)
    }
}

/// Outcome of a sync run
///
/// `changes` is ordered the way entries appear in the import map document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    /// Whether any entry changed (and the document was rewritten)
    pub changed: bool,
    /// One record per rewritten entry, in document order
    pub changes: Vec<ChangeRecord>,
}

impl SyncResult {
    /// A result with no changes
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Build a result from the accumulated change records
    pub fn from_changes(changes: Vec<ChangeRecord>) -> Self {
        Self {
            changed: !changes.is_empty(),
            changes,
        }
    }

    /// Number of rewritten entries
    pub fn count(&self) -> usize {
        self.changes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_record_new() {
        let record = ChangeRecord::new("zod", "3.21.0", "3.22.0");
        assert_eq!(record.name, "zod");
        assert_eq!(record.old_version, "3.21.0");
        assert_eq!(record.new_version, "3.22.0");
    }

    #[test]
    fn test_change_record_display() {
        let record = ChangeRecord::new("zod", "3.21.0", "3.22.0");
        assert_eq!(format!("{}", record), "zod: 3.21.0 → 3.22.0");
    }

    #[test]
    fn test_sync_result_unchanged() {
        let result = SyncResult::unchanged();
        assert!(!result.changed);
        assert!(result.changes.is_empty());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_sync_result_from_changes() {
        let result = SyncResult::from_changes(vec![ChangeRecord::new("zod", "3.21.0", "3.22.0")]);
        assert!(result.changed);
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_sync_result_from_empty_changes() {
        let result = SyncResult::from_changes(vec![]);
        assert!(!result.changed);
    }

    #[test]
    fn test_serde_round_trip() {
        let result = SyncResult::from_changes(vec![
            ChangeRecord::new("zod", "3.21.0", "3.22.0"),
            ChangeRecord::new("@std/assert", "0.226.0", "1.0.0"),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: SyncResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
