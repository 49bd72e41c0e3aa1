//! Build output discovery and normalization
//!
//! Turns the artifacts left behind by a Next.js or Vite build into a flat list
//! of [`ModuleRecord`]s:
//! - [`parsers`]: one pure parser per artifact format
//! - [`aggregator`]: locates artifacts, runs parsers, merges and deduplicates
//! - [`build_runner`]: best-effort invocation of the bundler itself
//! - [`detect`]: project kind detection from config files

pub mod aggregator;
pub mod build_runner;
pub mod detect;
pub mod parsers;
pub mod record;

pub use aggregator::{AggregatorOptions, ModuleAggregator};
pub use build_runner::{BuildError, BuildRunner, NpxBuildRunner};
pub use detect::detect_project_kind;
pub use parsers::ArtifactFormat;
pub use record::{dedup_by_name, ModuleRecord, DEFAULT_BUILD_TIME_MS_PER_KB};

use std::fmt;

/// Supported project kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// Next.js: `.next/build-manifest.json` plus optional webpack stats
    Next,
    /// Vite: Rollup meta files or raw bundles under `dist/`
    Vite,
}

impl ProjectKind {
    /// Build output directory relative to the project root
    pub fn output_dir(self) -> &'static str {
        match self {
            Self::Next => ".next",
            Self::Vite => "dist",
        }
    }

    /// Arguments passed to `npx` to build the project
    pub fn build_args(self) -> [&'static str; 2] {
        match self {
            Self::Next => ["next", "build"],
            Self::Vite => ["vite", "build"],
        }
    }

    /// Full command line shown to users, e.g. `npx next build`
    pub fn build_command(self) -> String {
        format!("npx {}", self.build_args().join(" "))
    }

    /// Config files whose presence identifies this kind
    pub fn marker_files(self) -> &'static [&'static str] {
        match self {
            Self::Next => &["next.config.js", "next.config.mjs", "next.config.ts"],
            Self::Vite => &["vite.config.js", "vite.config.ts", "vite.config.mjs"],
        }
    }

    /// Whether the bundler honours `ANALYZE=true`
    pub fn supports_analyze(self) -> bool {
        matches!(self, Self::Next)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("Next.js"),
            Self::Vite => f.write_str("Vite"),
        }
    }
}
