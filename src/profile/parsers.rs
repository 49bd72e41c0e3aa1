//! Parsers for the three bundler artifact formats
//!
//! Every parser takes an already-decoded JSON document and never fails:
//! missing or mistyped fields fall back to literal defaults.

use serde_json::Value;
use std::path::Path;

use super::record::{estimate_build_time_ms, ModuleRecord};
use crate::infra::FileSystem;

/// Known build artifact formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Next.js `build-manifest.json`: page route → list of asset files
    BuildManifest,
    /// webpack `stats.json`: explicit module list with optional profile data
    WebpackStats,
    /// Rollup/Vite `*.meta.json`: output name → byte count
    BundleMeta,
}

impl ArtifactFormat {
    /// Parse a decoded document of this format
    ///
    /// `static_root` and `fs` are only consulted by [`ArtifactFormat::BuildManifest`],
    /// which sizes the listed files on disk.
    pub fn parse<FS: FileSystem>(
        self,
        doc: &Value,
        static_root: &Path,
        fs: &FS,
        ms_per_kb: f64,
    ) -> Vec<ModuleRecord> {
        match self {
            Self::BuildManifest => parse_build_manifest(doc, static_root, fs, ms_per_kb),
            Self::WebpackStats => parse_webpack_stats(doc),
            Self::BundleMeta => parse_bundle_meta(doc),
        }
    }
}

/// Parse a Next.js build manifest
///
/// One record per page; size is the sum of every listed file found under
/// `static_root`. Missing files count as zero.
pub fn parse_build_manifest<FS: FileSystem>(
    doc: &Value,
    static_root: &Path,
    fs: &FS,
    ms_per_kb: f64,
) -> Vec<ModuleRecord> {
    let Some(pages) = doc.get("pages").and_then(Value::as_object) else {
        return Vec::new();
    };

    pages
        .iter()
        .map(|(page, files)| {
            let files: Vec<String> = files
                .as_array()
                .map(|list| {
                    list.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            let size: u64 = files
                .iter()
                .filter_map(|file| fs.file_size(&static_root.join(file)))
                .sum();

            ModuleRecord::new(
                page.as_str(),
                size,
                estimate_build_time_ms(size, ms_per_kb),
                files,
            )
        })
        .collect()
}

/// Parse a webpack stats document
pub fn parse_webpack_stats(doc: &Value) -> Vec<ModuleRecord> {
    let Some(modules) = doc.get("modules").and_then(Value::as_array) else {
        return Vec::new();
    };

    modules
        .iter()
        .map(|module| {
            let name = module
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            let size = module.get("size").map(as_non_negative_u64).unwrap_or(0);
            let build_time = module
                .get("profile")
                .and_then(|profile| profile.get("total"))
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            let chunks = module
                .get("chunks")
                .and_then(Value::as_array)
                .map(|list| list.iter().filter_map(chunk_id).collect())
                .unwrap_or_default();

            ModuleRecord::new(name, size, build_time, chunks)
        })
        .collect()
}

/// Parse a Rollup/Vite meta document
pub fn parse_bundle_meta(doc: &Value) -> Vec<ModuleRecord> {
    let Some(outputs) = doc.get("outputs").and_then(Value::as_object) else {
        return Vec::new();
    };

    outputs
        .iter()
        .map(|(output, info)| {
            let size = info.get("bytes").map(as_non_negative_u64).unwrap_or(0);
            ModuleRecord::new(output.as_str(), size, 0.0, Vec::new())
        })
        .collect()
}

fn as_non_negative_u64(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map(|f| f as u64)
        })
        .unwrap_or(0)
}

// webpack emits numeric chunk ids in production builds
fn chunk_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
