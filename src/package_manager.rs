//! Node package manager detection
//!
//! Catalog indirection is a pnpm feature, so the catalog resolver needs to know
//! which package manager owns the workspace before it trusts a `catalog:` range.
//! Detection is an injected capability: the resolver only decides what to do
//! with the answer, while the probe owns the filesystem heuristics.

use async_trait::async_trait;
use std::path::Path;

/// A Node.js package manager recognized by lockfile markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl NodePackageManager {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            NodePackageManager::Npm => "npm",
            NodePackageManager::Pnpm => "pnpm",
            NodePackageManager::Yarn => "yarn",
            NodePackageManager::Bun => "bun",
        }
    }

    /// Whether this manager supports `catalog:` version ranges
    pub fn supports_catalogs(&self) -> bool {
        matches!(self, NodePackageManager::Pnpm)
    }
}

/// Capability to answer "which package manager owns this directory?"
#[async_trait]
pub trait PackageManagerProbe: Send + Sync {
    /// Detect the package manager for a directory, or None if no marker exists
    async fn detect(&self, dir: &Path) -> Option<NodePackageManager>;
}

/// Probe that inspects lockfile markers on disk
///
/// Lockfiles outrank `pnpm-workspace.yaml`: a yarn-owned tree with a stray
/// workspace file is still yarn.
#[derive(Debug, Default)]
pub struct LockfileProbe;

impl LockfileProbe {
    /// Create a new lockfile probe
    pub fn new() -> Self {
        Self
    }
}

async fn exists(dir: &Path, file: &str) -> bool {
    tokio::fs::try_exists(dir.join(file)).await.unwrap_or(false)
}

#[async_trait]
impl PackageManagerProbe for LockfileProbe {
    async fn detect(&self, dir: &Path) -> Option<NodePackageManager> {
        // Check for lockfiles in order of preference
        if exists(dir, "pnpm-lock.yaml").await {
            return Some(NodePackageManager::Pnpm);
        }
        if exists(dir, "yarn.lock").await {
            return Some(NodePackageManager::Yarn);
        }
        if exists(dir, "bun.lockb").await || exists(dir, "bun.lock").await {
            return Some(NodePackageManager::Bun);
        }
        if exists(dir, "package-lock.json").await {
            return Some(NodePackageManager::Npm);
        }
        // A workspace file without any lockfile still marks a pnpm workspace
        if exists(dir, "pnpm-workspace.yaml").await {
            return Some(NodePackageManager::Pnpm);
        }
        // Default to npm if package.json exists but no lockfile
        if exists(dir, "package.json").await {
            return Some(NodePackageManager::Npm);
        }
        None
    }
}
