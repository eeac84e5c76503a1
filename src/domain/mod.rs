//! Core domain models for denosync
//!
//! This module contains the fundamental types used throughout the application:
//! - Registry specifier decomposition for import map values
//! - Version extraction and precision policy
//! - Sync result structures

mod report;
mod specifier;
mod version;

pub use report::{ChangeRecord, SyncResult};
pub use specifier::{ImportSpecifier, Registry};
pub use version::{leading_version, segment_count, Precision};
