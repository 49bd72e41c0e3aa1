//! Heuristic optimization hints for the largest modules

use crate::profile::ModuleRecord;

/// Only this many of the largest modules are inspected
pub const SUGGESTION_WINDOW: usize = 5;

/// `node_modules` entries above this size get a code-splitting hint
pub const LARGE_DEPENDENCY_BYTES: u64 = 100 * 1024;

/// Generate at most one suggestion per record for the first five ranked records
///
/// Rules are checked in order and the first match wins:
/// 1. `moment` → lighter date library
/// 2. `lodash` (but not `lodash-es`) → ES module build or per-function imports
/// 3. large `node_modules` entry → code-splitting
///
/// # Examples
///
/// ```
/// use build_profiler::profile::ModuleRecord;
/// use build_profiler::report::suggestions;
///
/// let top = vec![ModuleRecord::new("node_modules/moment/moment.js", 300_000, 0.0, vec![])];
/// let hints = suggestions(&top);
/// assert!(hints[0].contains("date-fns"));
/// ```
pub fn suggestions<'a>(ranked: impl IntoIterator<Item = &'a ModuleRecord>) -> Vec<String> {
    ranked
        .into_iter()
        .take(SUGGESTION_WINDOW)
        .filter_map(suggest)
        .collect()
}

fn suggest(record: &ModuleRecord) -> Option<String> {
    let name = record.name.to_lowercase();

    if name.contains("moment") {
        Some("moment.js: Consider date-fns or dayjs (smaller)".to_string())
    } else if name.contains("lodash") && !name.contains("lodash-es") {
        Some("lodash: Use lodash-es or import specific functions".to_string())
    } else if name.contains("node_modules") && record.size_bytes > LARGE_DEPENDENCY_BYTES {
        Some(format!(
            "{}: Consider code-splitting for large deps",
            record.name
        ))
    } else {
        None
    }
}
