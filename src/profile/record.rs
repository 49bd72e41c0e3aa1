//! Normalized per-module record shared by every parser and report

use std::collections::HashSet;

/// Build-time proxy used when the bundler reports no timing: 1 KB ≈ 1 ms
pub const DEFAULT_BUILD_TIME_MS_PER_KB: f64 = 1.0;

/// One module, page, or output chunk of a build
///
/// `build_time_ms` is only a real measurement when the source format carries
/// profiling data; otherwise it is derived from size.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRecord {
    /// File path, page route, or chunk name
    pub name: String,
    /// Size on disk or as reported by the bundler
    pub size_bytes: u64,
    /// Reported or estimated build time in milliseconds
    pub build_time_ms: f64,
    /// Chunks or files contributing to this record's size
    pub chunk_refs: Vec<String>,
}

impl ModuleRecord {
    /// Create a record, substituting `"unknown"` for an empty name
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        build_time_ms: f64,
        chunk_refs: Vec<String>,
    ) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = "unknown".to_string();
        }
        let build_time_ms = if build_time_ms.is_finite() && build_time_ms > 0.0 {
            build_time_ms
        } else {
            0.0
        };

        Self {
            name,
            size_bytes,
            build_time_ms,
            chunk_refs,
        }
    }
}

/// Estimate build time from size when the bundler reports none
///
/// # Examples
///
/// ```
/// use build_profiler::profile::record::{estimate_build_time_ms, DEFAULT_BUILD_TIME_MS_PER_KB};
///
/// assert_eq!(estimate_build_time_ms(2000, DEFAULT_BUILD_TIME_MS_PER_KB), 2.0);
/// ```
pub fn estimate_build_time_ms(size_bytes: u64, ms_per_kb: f64) -> f64 {
    size_bytes as f64 / 1000.0 * ms_per_kb
}

/// Drop records whose name was already seen, keeping the first occurrence
pub fn dedup_by_name(records: Vec<ModuleRecord>) -> Vec<ModuleRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.name.clone()))
        .collect()
}
