//! Machine-readable module listing

use serde::Serialize;

use crate::profile::ModuleRecord;

/// JSON shape of one module
#[derive(Debug, Serialize)]
struct JsonModule<'a> {
    name: &'a str,
    size: u64,
    build_time: f64,
}

/// Serialize records as a pretty-printed JSON array, preserving list order
///
/// # Examples
///
/// ```
/// use build_profiler::profile::ModuleRecord;
/// use build_profiler::report::to_json;
///
/// let json = to_json(&[ModuleRecord::new("test.js", 1024, 10.0, vec![])])?;
/// assert!(json.contains("\"name\": \"test.js\""));
/// assert!(json.contains("\"size\": 1024"));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn to_json(records: &[ModuleRecord]) -> Result<String, serde_json::Error> {
    let modules: Vec<JsonModule<'_>> = records
        .iter()
        .map(|r| JsonModule {
            name: &r.name,
            size: r.size_bytes,
            build_time: r.build_time_ms,
        })
        .collect();
    serde_json::to_string_pretty(&modules)
}
