//! Console reporting for sync results
//!
//! One line per rewritten import with a colored major/minor/patch label, plus
//! a banner line. Entirely gated by the quiet flag and fed by the returned
//! `SyncResult`, so printing can never influence the outcome.

use crate::domain::{ChangeRecord, SyncResult};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Semantic change type between two embedded versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// First segment changed (breaking)
    Major,
    /// Second segment changed (features)
    Minor,
    /// Anything after that (fixes)
    Patch,
    /// Unparseable on either side
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |v: &str| -> Option<Vec<u64>> {
            v.split('.').map(|s| s.parse::<u64>().ok()).collect()
        };

        match (parse(old), parse(new)) {
            (Some(old_parts), Some(new_parts)) => {
                let segment = |parts: &[u64], i: usize| parts.get(i).copied().unwrap_or(0);
                if segment(&old_parts, 0) != segment(&new_parts, 0) {
                    VersionChangeType::Major
                } else if segment(&old_parts, 1) != segment(&new_parts, 1) {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text reporter for sync results
pub struct TextReporter {
    /// Suppress all output
    quiet: bool,
    /// Whether to use colors
    color: bool,
}

impl TextReporter {
    /// Create a new reporter
    pub fn new(quiet: bool) -> Self {
        Self { quiet, color: true }
    }

    /// Create a reporter with color control (tests)
    pub fn with_color(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }

    /// Write the banner and per-change lines for a result
    pub fn report(
        &self,
        result: &SyncResult,
        import_map_path: &Path,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let name = import_map_path.display();
        if !result.changed {
            writeln!(writer, "{}: imports already in sync", name)?;
            return Ok(());
        }

        let imports = if result.count() == 1 { "import" } else { "imports" };
        writeln!(writer, "{}: {} {} updated", name, result.count(), imports)?;
        for change in &result.changes {
            writeln!(writer, "  {}", self.change_line(change))?;
        }
        Ok(())
    }

    fn change_line(&self, change: &ChangeRecord) -> String {
        let change_type = VersionChangeType::from_versions(&change.old_version, &change.new_version);
        let label = if self.color {
            change_type.colored_label()
        } else {
            change_type.label().to_string()
        };
        format!(
            "{}: {} → {} ({})",
            change.name, change.old_version, change.new_version, label
        )
    }
}
