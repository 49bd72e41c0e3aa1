#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! build-profiler library
//!
//! Profiles the build output of Next.js and Vite projects: collects
//! per-module size records from bundler artifacts, ranks them, and renders
//! console or JSON reports. The same pieces the CLI uses are available
//! programmatically.
//!
//! # Basic Example
//!
//! Ranking records and rendering the table:
//!
//! ```
//! use build_profiler::profile::ModuleRecord;
//! use build_profiler::report::{format_console_report, rank, suggestions};
//!
//! let modules = vec![
//!     ModuleRecord::new("node_modules/lodash/lodash.js", 70 * 1024, 70.0, vec![]),
//!     ModuleRecord::new("src/index.js", 2 * 1024, 2.0, vec![]),
//! ];
//!
//! let ranking = rank(&modules, 20);
//! assert_eq!(ranking.entries[0].record.name, "node_modules/lodash/lodash.js");
//!
//! let hints = suggestions(ranking.records());
//! let report = format_console_report(&ranking, &hints).unwrap();
//! assert!(report.contains("lodash-es"));
//! ```
//!
//! # Advanced Example: Collecting From A Build Directory
//!
//! ```
//! use build_profiler::profile::{AggregatorOptions, ModuleAggregator, ProjectKind};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let project = TempDir::new().unwrap();
//! let assets = project.path().join("dist/assets");
//! fs::create_dir_all(&assets).unwrap();
//! fs::write(assets.join("index.js"), vec![b'x'; 2048]).unwrap();
//!
//! let options = AggregatorOptions { run_build: false, ..AggregatorOptions::default() };
//! let modules = ModuleAggregator::new(project.path(), options).collect(ProjectKind::Vite);
//!
//! assert_eq!(modules.len(), 1);
//! assert_eq!(modules[0].name, "assets/index.js");
//! assert_eq!(modules[0].size_bytes, 2048);
//! ```

/// Per-module size limits for CI
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Project configuration file loading
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Build output collection and artifact parsing
pub mod profile;
/// Ranking, suggestions and report rendering
pub mod report;
