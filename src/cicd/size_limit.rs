//! Per-module size limit enforcement for CI
//!
//! Unlike a whole-bundle budget, the limit applies to every module on its own:
//! a single oversized chunk fails the run.

use console::style;

use crate::profile::ModuleRecord;

/// A module that exceeded the configured limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeViolation {
    /// Module name
    pub name: String,
    /// Module size in bytes
    pub size_bytes: u64,
}

impl SizeViolation {
    /// One-line description, e.g. `main.js exceeds 100KB (250KB)`
    pub fn describe(&self, max_kb: u64) -> String {
        format!(
            "{} exceeds {}KB ({}KB)",
            self.name,
            max_kb,
            self.size_bytes / 1024
        )
    }
}

/// Result of checking records against a limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeCheck {
    /// The limit in KB
    pub max_kb: u64,
    /// Offending modules in input order
    pub violations: Vec<SizeViolation>,
}

impl SizeCheck {
    /// Whether every module is within the limit
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Print one colored line per violation to stderr
    pub fn print_violations(&self) {
        for violation in &self.violations {
            eprintln!(
                "{} {}",
                style("Error:").red().bold(),
                violation.describe(self.max_kb)
            );
        }
    }
}

/// Per-module size limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimit {
    max_kb: u64,
}

impl SizeLimit {
    /// Create a limit of `max_kb` kilobytes (1 KB = 1024 bytes)
    pub fn new(max_kb: u64) -> Self {
        Self { max_kb }
    }

    /// The limit in bytes
    pub fn max_bytes(&self) -> u64 {
        self.max_kb.saturating_mul(1024)
    }

    /// Check every record against the limit
    ///
    /// # Examples
    ///
    /// ```
    /// use build_profiler::cicd::SizeLimit;
    /// use build_profiler::profile::ModuleRecord;
    ///
    /// let modules = vec![
    ///     ModuleRecord::new("small.js", 10 * 1024, 0.0, vec![]),
    ///     ModuleRecord::new("huge.js", 600 * 1024, 0.0, vec![]),
    /// ];
    /// let check = SizeLimit::new(500).check(&modules);
    /// assert!(!check.passed());
    /// assert_eq!(check.violations[0].describe(500), "huge.js exceeds 500KB (600KB)");
    /// ```
    pub fn check(&self, records: &[ModuleRecord]) -> SizeCheck {
        let max_bytes = self.max_bytes();
        let violations = records
            .iter()
            .filter(|r| r.size_bytes > max_bytes)
            .map(|r| SizeViolation {
                name: r.name.clone(),
                size_bytes: r.size_bytes,
            })
            .collect();

        SizeCheck {
            max_kb: self.max_kb,
            violations,
        }
    }
}
