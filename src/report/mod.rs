//! Ranked size reports
//!
//! - [`ranking`]: top-N selection and percentage shares
//! - [`console`]: terminal table
//! - [`json`]: machine-readable listing
//! - [`suggestions`]: heavy-dependency hints

pub mod console;
pub mod json;
pub mod ranking;
pub mod suggestions;

pub use console::format_console_report;
pub use json::to_json;
pub use ranking::{rank, RankedModule, Ranking};
pub use suggestions::suggestions;
