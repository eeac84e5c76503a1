//! Registry specifier parsing for import map values
//!
//! Handles the two dialects Deno resolves through a package registry:
//! - npm: `npm:lodash@4.17.21`, `npm:lodash@4.17.21/fp`
//! - jsr: `jsr:@std/assert@1.0.0`, `jsr:@std/path@1.0.0/posix`
//!
//! Anything else (bare URLs, other registry markers, suffixed versions) is not a
//! parse error; it simply does not match and the entry is left alone.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// The registry a specifier resolves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Registry {
    /// npm registry (`npm:` marker)
    Npm,
    /// JSR registry (`jsr:` marker, scoped names only)
    Jsr,
}

impl Registry {
    /// The marker prefix as written in the import map
    pub fn marker(&self) -> &'static str {
        match self {
            Registry::Npm => "npm",
            Registry::Jsr => "jsr",
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

// The embedded version is one to three dot-separated integer segments. Suffixed
// versions (prerelease/build metadata) must not match.
static NPM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^npm:([^@]+)@(\d+(?:\.\d+){0,2})(/.+)?$").unwrap());
static JSR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^jsr:(@[^/@]+/[^/@]+)@(\d+(?:\.\d+){0,2})(/.+)?$").unwrap());

/// A decomposed registry specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Which registry dialect matched
    pub registry: Registry,
    /// Package name (includes the scope for jsr)
    pub name: String,
    /// The version embedded in the specifier
    pub version: String,
    /// Optional subpath, including its leading `/`
    pub subpath: Option<String>,
}

impl ImportSpecifier {
    /// Parse an import map value into its components
    ///
    /// Dialects are tried npm-first; the marker prefixes make the patterns
    /// mutually exclusive, so the order is not a correctness concern.
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(caps) = NPM_RE.captures(value) {
            return Some(ImportSpecifier {
                registry: Registry::Npm,
                name: caps.get(1)?.as_str().to_string(),
                version: caps.get(2)?.as_str().to_string(),
                subpath: caps.get(3).map(|m| m.as_str().to_string()),
            });
        }

        if let Some(caps) = JSR_RE.captures(value) {
            return Some(ImportSpecifier {
                registry: Registry::Jsr,
                name: caps.get(1)?.as_str().to_string(),
                version: caps.get(2)?.as_str().to_string(),
                subpath: caps.get(3).map(|m| m.as_str().to_string()),
            });
        }

        None
    }

    /// Format the specifier with a different embedded version, keeping the
    /// registry marker, package name, and subpath intact
    pub fn with_version(&self, version: &str) -> String {
        format!(
            "{}:{}@{}{}",
            self.registry,
            self.name,
            version,
            self.subpath.as_deref().unwrap_or("")
        )
    }
}

impl fmt::Display for ImportSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_version(&self.version))
    }
}
