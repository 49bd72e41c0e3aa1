//! Project configuration for build-profiler
//!
//! An optional `.build-profiler.toml` in the project root supplies defaults
//! for the table size, size limit, analysis mode and build-time proxy rate.

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CONFIG_FILE_NAME, DEFAULT_TOP};
pub use loader::ConfigLoader;
