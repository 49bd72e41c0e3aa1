//! CI/CD integration
//!
//! Provides the per-module size limit behind `--max-size`.

pub mod size_limit;

pub use size_limit::{SizeCheck, SizeLimit, SizeViolation};
