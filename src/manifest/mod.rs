//! The two primary documents of a sync run
//!
//! - package.json: read-only source of declared version ranges
//! - deno.json: the import map, the only document ever rewritten

mod import_map;
mod package_json;

pub use import_map::ImportMapDocument;
pub use package_json::PackageManifest;
