//! Size ranking over collected modules

use crate::profile::ModuleRecord;

/// A record with its position and share of the ranked total
#[derive(Debug, Clone, PartialEq)]
pub struct RankedModule<'a> {
    /// 1-based position
    pub rank: usize,
    /// The underlying record
    pub record: &'a ModuleRecord,
    /// Share of [`Ranking::total_size`] in percent (0 when the total is 0)
    pub percentage: f64,
}

/// The top-N records by size
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    /// Records in descending size order
    pub entries: Vec<RankedModule<'a>>,
    /// Sum of sizes over the kept entries only
    pub total_size: u64,
}

impl<'a> Ranking<'a> {
    /// Whether nothing was ranked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked records in order
    pub fn records(&self) -> impl Iterator<Item = &'a ModuleRecord> + '_ {
        self.entries.iter().map(|entry| entry.record)
    }
}

/// Rank records by size, keeping the largest `top_n`
///
/// Equal sizes keep their input order. Percentages are relative to the kept
/// records, not the full list.
///
/// # Examples
///
/// ```
/// use build_profiler::profile::ModuleRecord;
/// use build_profiler::report::rank;
///
/// let modules = vec![
///     ModuleRecord::new("a.js", 10, 0.0, vec![]),
///     ModuleRecord::new("b.js", 50, 0.0, vec![]),
///     ModuleRecord::new("c.js", 30, 0.0, vec![]),
/// ];
/// let ranking = rank(&modules, 2);
/// let names: Vec<_> = ranking.records().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["b.js", "c.js"]);
/// assert_eq!(ranking.total_size, 80);
/// ```
pub fn rank(records: &[ModuleRecord], top_n: usize) -> Ranking<'_> {
    let mut sorted: Vec<&ModuleRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    sorted.truncate(top_n);

    let total_size: u64 = sorted.iter().map(|r| r.size_bytes).sum();

    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedModule {
            rank: i + 1,
            record,
            percentage: percentage_of(record.size_bytes, total_size),
        })
        .collect();

    Ranking {
        entries,
        total_size,
    }
}

fn percentage_of(size: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        size as f64 / total as f64 * 100.0
    }
}
