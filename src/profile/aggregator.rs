//! Collects module records from a project's build output
//!
//! For each project kind the aggregator makes sure build output exists
//! (triggering a best-effort build if not), finds the artifacts it knows how to
//! read, parses them, and deduplicates the merged list by name.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;

use super::build_runner::{BuildRunner, NpxBuildRunner};
use super::parsers::ArtifactFormat;
use super::record::{
    dedup_by_name, estimate_build_time_ms, ModuleRecord, DEFAULT_BUILD_TIME_MS_PER_KB,
};
use super::ProjectKind;
use crate::infra::{FileSystem, RealFileSystem};

/// Next.js build manifest, relative to `.next/`
pub const NEXT_MANIFEST: &str = "build-manifest.json";
/// webpack stats written by analyzer plugins, relative to `.next/`
pub const NEXT_WEBPACK_STATS: &str = "server/webpack-stats.json";
/// Directory manifest entries are resolved against, relative to `.next/`
pub const NEXT_STATIC_DIR: &str = "static";
/// Suffix of Rollup/Vite meta files
pub const META_SUFFIX: &str = ".meta.json";
/// Extensions treated as bundles when no meta file is available
pub const BUNDLE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// Knobs for a collection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatorOptions {
    /// Run the bundler when the output directory is missing
    pub run_build: bool,
    /// Ask the bundler for its analysis mode
    pub analyze: bool,
    /// Build-time proxy rate for formats without timing data
    pub ms_per_kb: f64,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            run_build: true,
            analyze: true,
            ms_per_kb: DEFAULT_BUILD_TIME_MS_PER_KB,
        }
    }
}

/// Turns a project's build output into a deduplicated record list
///
/// # Examples
///
/// ```no_run
/// use build_profiler::profile::{AggregatorOptions, ModuleAggregator, ProjectKind};
///
/// let aggregator = ModuleAggregator::new("./app", AggregatorOptions::default());
/// let modules = aggregator.collect(ProjectKind::Vite);
/// if modules.is_empty() {
///     eprintln!("No build output found");
/// }
/// ```
pub struct ModuleAggregator<FS: FileSystem = RealFileSystem, B: BuildRunner = NpxBuildRunner> {
    project_root: PathBuf,
    options: AggregatorOptions,
    fs: FS,
    builder: B,
}

impl ModuleAggregator<RealFileSystem, NpxBuildRunner> {
    /// Create an aggregator over the real filesystem that builds with `npx`
    pub fn new(project_root: impl Into<PathBuf>, options: AggregatorOptions) -> Self {
        Self::with_parts(project_root, options, RealFileSystem, NpxBuildRunner::new(true))
    }
}

impl<FS: FileSystem, B: BuildRunner> ModuleAggregator<FS, B> {
    /// Create an aggregator with custom filesystem and build runner
    pub fn with_parts(
        project_root: impl Into<PathBuf>,
        options: AggregatorOptions,
        fs: FS,
        builder: B,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            options,
            fs,
            builder,
        }
    }

    /// Collect records for the given project kind
    ///
    /// Returns an empty list when no usable build output exists.
    #[must_use = "an empty result means no build output was found"]
    pub fn collect(&self, kind: ProjectKind) -> Vec<ModuleRecord> {
        let output_dir = self.project_root.join(kind.output_dir());
        self.ensure_built(kind, &output_dir);

        let records = match kind {
            ProjectKind::Next => self.collect_next(&output_dir),
            ProjectKind::Vite => self.collect_vite(&output_dir),
        };

        dedup_by_name(records)
    }

    fn ensure_built(&self, kind: ProjectKind, output_dir: &Path) {
        if self.fs.is_dir(output_dir) {
            return;
        }
        if !self.options.run_build {
            debug!("{} missing, build skipped", output_dir.display());
            return;
        }

        // Output may still exist from an earlier run, so failures only get logged.
        if let Err(e) = self
            .builder
            .build(kind, &self.project_root, self.options.analyze)
        {
            debug!("Build attempt failed: {}", e);
        }
    }

    fn collect_next(&self, next_dir: &Path) -> Vec<ModuleRecord> {
        let static_root = next_dir.join(NEXT_STATIC_DIR);
        let mut records = Vec::new();

        for (relative, format) in [
            (NEXT_MANIFEST, ArtifactFormat::BuildManifest),
            (NEXT_WEBPACK_STATS, ArtifactFormat::WebpackStats),
        ] {
            let path = next_dir.join(relative);
            if !self.fs.exists(&path) {
                continue;
            }
            match self.read_json(&path) {
                Ok(doc) => {
                    let parsed =
                        format.parse(&doc, &static_root, &self.fs, self.options.ms_per_kb);
                    debug!("{}: {} records", path.display(), parsed.len());
                    records.extend(parsed);
                }
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        records
    }

    fn collect_vite(&self, dist_dir: &Path) -> Vec<ModuleRecord> {
        let mut files = Vec::new();
        self.collect_files(dist_dir, &mut files);
        files.sort();

        let mut records = Vec::new();
        for meta in files.iter().filter(|p| is_meta_file(p)) {
            match self.read_json(meta) {
                Ok(doc) => records.extend(ArtifactFormat::BundleMeta.parse(
                    &doc,
                    dist_dir,
                    &self.fs,
                    self.options.ms_per_kb,
                )),
                Err(e) => debug!("Skipping {}: {}", meta.display(), e),
            }
        }

        if records.is_empty() {
            debug!("No meta records under {}, sizing bundles", dist_dir.display());
            records = files
                .iter()
                .filter(|p| is_bundle_file(p))
                .filter_map(|path| {
                    let size = self.fs.file_size(path)?;
                    Some(ModuleRecord::new(
                        relative_name(path, dist_dir),
                        size,
                        estimate_build_time_ms(size, self.options.ms_per_kb),
                        Vec::new(),
                    ))
                })
                .collect();
        }

        records
    }

    /// Recursively collect non-directory entries below `dir`
    ///
    /// Symlinks are never descended into. Unreadable directories are logged
    /// and skipped so the rest of the tree is still scanned.
    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Could not scan {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            // DirEntry::file_type does not follow symlinks
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => self.collect_files(&entry.path(), files),
                Ok(_) => files.push(entry.path()),
                Err(e) => debug!("Skipping {}: {}", entry.path().display(), e),
            }
        }
    }

    fn read_json(&self, path: &Path) -> anyhow::Result<Value> {
        let contents = self.fs.read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn is_meta_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(META_SUFFIX))
        .unwrap_or(false)
}

fn is_bundle_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| BUNDLE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Path relative to `base` with `/` separators on every platform
fn relative_name(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
