//! Version extraction and precision policy
//!
//! A manifest range like `^4.17.21` is reduced to its leading numeric version by
//! stripping non-numeric leading characters; no range-satisfaction semantics are
//! involved. The precision policy then decides how many dot-separated segments
//! of that candidate survive into the rewritten specifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many version segments to keep when rewriting an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Keep as many segments as the currently embedded version has
    #[default]
    Auto,
    /// Keep the first segment only
    Major,
    /// Keep the first two segments
    Minor,
    /// Keep the candidate unmodified
    Full,
}

impl Precision {
    /// Compute the final version for a candidate, given the version currently
    /// embedded in the entry being updated
    ///
    /// `auto` counts the segments of the embedded version, not the candidate;
    /// `minor` does not pad a one-segment candidate.
    pub fn apply(&self, candidate: &str, embedded: &str) -> String {
        match self {
            Precision::Major => truncate_segments(candidate, 1),
            Precision::Minor => truncate_segments(candidate, 2),
            Precision::Full => candidate.to_string(),
            Precision::Auto => truncate_segments(candidate, segment_count(embedded)),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precision::Auto => "auto",
            Precision::Major => "major",
            Precision::Minor => "minor",
            Precision::Full => "full",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Precision::Auto),
            "major" => Ok(Precision::Major),
            "minor" => Ok(Precision::Minor),
            "full" => Ok(Precision::Full),
            _ => Err(format!(
                "invalid precision '{}': expected 'auto', 'major', 'minor', or 'full'",
                s
            )),
        }
    }
}

/// Strip non-numeric leading characters from a range string
///
/// Approximates "the concrete version `^4.17.21` refers to" without semver
/// range resolution. May return an empty string for ranges with no digits.
pub fn leading_version(range: &str) -> &str {
    range.trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Number of dot-separated segments in a version string
pub fn segment_count(version: &str) -> usize {
    version.split('.').count()
}

/// Keep the first `count` dot-separated segments of a version string
fn truncate_segments(version: &str, count: usize) -> String {
    version
        .split('.')
        .take(count.max(1))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_version_caret() {
        assert_eq!(leading_version("^4.17.21"), "4.17.21");
    }

    #[test]
    fn test_leading_version_tilde() {
        assert_eq!(leading_version("~1.2.3"), "1.2.3");
    }

    #[test]
    fn test_leading_version_comparison() {
        assert_eq!(leading_version(">=2.0.0"), "2.0.0");
    }

    #[test]
    fn test_leading_version_bare() {
        assert_eq!(leading_version("3.22.4"), "3.22.4");
    }

    #[test]
    fn test_leading_version_workspace_protocol() {
        assert_eq!(leading_version("workspace:^1.2.3"), "1.2.3");
    }

    #[test]
    fn test_leading_version_no_digits() {
        assert_eq!(leading_version("*"), "");
        assert_eq!(leading_version("latest"), "");
        assert_eq!(leading_version(""), "");
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count("3"), 1);
        assert_eq!(segment_count("3.21"), 2);
        assert_eq!(segment_count("3.21.0"), 3);
    }

    #[test]
    fn test_apply_major() {
        assert_eq!(Precision::Major.apply("4.17.21", "4.17.0"), "4");
    }

    #[test]
    fn test_apply_minor() {
        assert_eq!(Precision::Minor.apply("4.17.21", "4.17.0"), "4.17");
    }

    #[test]
    fn test_apply_minor_short_candidate() {
        // No padding: a one-segment candidate stays one segment
        assert_eq!(Precision::Minor.apply("4", "4.17.0"), "4");
    }

    #[test]
    fn test_apply_full() {
        assert_eq!(Precision::Full.apply("4.17.21", "4"), "4.17.21");
    }

    #[test]
    fn test_apply_auto_matches_embedded_precision() {
        assert_eq!(Precision::Auto.apply("3.22.4", "3"), "3");
        assert_eq!(Precision::Auto.apply("3.22.4", "3.21"), "3.22");
        assert_eq!(Precision::Auto.apply("3.22.4", "3.21.0"), "3.22.4");
    }

    #[test]
    fn test_apply_auto_candidate_shorter_than_embedded() {
        assert_eq!(Precision::Auto.apply("4.17", "4.17.0"), "4.17");
    }

    #[test]
    fn test_precision_default_is_auto() {
        assert_eq!(Precision::default(), Precision::Auto);
    }

    #[test]
    fn test_precision_from_str() {
        assert_eq!("auto".parse::<Precision>().unwrap(), Precision::Auto);
        assert_eq!("major".parse::<Precision>().unwrap(), Precision::Major);
        assert_eq!("minor".parse::<Precision>().unwrap(), Precision::Minor);
        assert_eq!("full".parse::<Precision>().unwrap(), Precision::Full);
    }

    #[test]
    fn test_precision_from_str_invalid() {
        let err = "patch".parse::<Precision>().unwrap_err();
        assert!(err.contains("invalid precision"));
        assert!(err.contains("patch"));
    }

    #[test]
    fn test_precision_display() {
        assert_eq!(format!("{}", Precision::Auto), "auto");
        assert_eq!(format!("{}", Precision::Full), "full");
    }

    #[test]
    fn test_serde_precision() {
        let json = serde_json::to_string(&Precision::Minor).unwrap();
        assert_eq!(json, "\"minor\"");
        let parsed: Precision = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Precision::Minor);
    }
}
