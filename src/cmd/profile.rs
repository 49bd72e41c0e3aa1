//! Profile command implementation
//!
//! Resolves settings from flags and `.build-profiler.toml`, collects module
//! records from the build output, prints the report, and enforces the size
//! limit.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::{style, Term};
use std::path::{Path, PathBuf};

use crate::cicd::SizeLimit;
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::ProfilerError;
use crate::fmt::MICROSCOPE;
use crate::infra::RealFileSystem;
use crate::profile::{
    detect_project_kind, AggregatorOptions, ModuleAggregator, ModuleRecord, NpxBuildRunner,
    ProjectKind,
};
use crate::report;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Ranked console table with suggestions
    #[default]
    Table,
    /// JSON array of every module
    Json,
}

/// Options for one profiling run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Project root
    pub path: PathBuf,
    /// Explicit project kind; auto-detected when `None`
    pub kind: Option<ProjectKind>,
    /// Table size override
    pub top: Option<usize>,
    /// Output format
    pub format: OutputFormat,
    /// Size limit override in KB
    pub max_size_kb: Option<u64>,
    /// Skip the external build even if output is missing
    pub no_build: bool,
}

/// Settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    /// Modules shown in the table
    pub top: usize,
    /// Size limit in KB, if any
    pub max_size_kb: Option<u64>,
    /// Options handed to the aggregator
    pub aggregator: AggregatorOptions,
}

impl ResolvedSettings {
    /// Merge command-line flags over file configuration
    pub fn resolve(args: &ProfileArgs, config: &ConfigFile) -> Result<Self, ProfilerError> {
        let top = args.top.unwrap_or_else(|| config.top_or_default());
        if top == 0 {
            return Err(ProfilerError::InvalidTopN { value: top });
        }

        Ok(Self {
            top,
            // A limit of 0 means "no limit", from either source
            max_size_kb: args
                .max_size_kb
                .or(config.max_size_kb)
                .filter(|&max_kb| max_kb > 0),
            aggregator: AggregatorOptions {
                run_build: !args.no_build,
                analyze: config.analyze_or_default(),
                ms_per_kb: config.ms_per_kb_or_default(),
            },
        })
    }
}

/// Run a profile
///
/// # Examples
///
/// ```no_run
/// use build_profiler::cmd::{cmd_profile, OutputFormat, ProfileArgs};
///
/// cmd_profile(&ProfileArgs {
///     path: "./app".into(),
///     format: OutputFormat::Json,
///     ..ProfileArgs::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_profile(args: &ProfileArgs) -> Result<()> {
    let project_root = resolve_root(&args.path)?;
    let config = ConfigLoader::load(&project_root)?;
    let settings = ResolvedSettings::resolve(args, &config)?;

    let kind = match args.kind {
        Some(kind) => kind,
        None => detect_project_kind(&project_root, &RealFileSystem).ok_or_else(|| {
            ProfilerError::ProjectKindUndetected {
                path: project_root.clone(),
            }
        })?,
    };

    // Banner goes to stderr so JSON on stdout stays parseable
    eprintln!(
        "{} {} {}",
        MICROSCOPE,
        style("Profiling:").bold().blue(),
        project_root.display()
    );
    eprintln!("   {}", style(format!("Type: {}", kind)).dim());

    let stderr_is_term = Term::stderr().is_term();
    let aggregator = ModuleAggregator::with_parts(
        &project_root,
        settings.aggregator,
        RealFileSystem,
        NpxBuildRunner::new(stderr_is_term),
    );
    let modules = aggregator.collect(kind);
    log::debug!("Collected {} modules", modules.len());

    if modules.is_empty() {
        return Err(ProfilerError::NoBuildOutput { kind }.into());
    }

    print_modules(&modules, args.format, settings.top)?;

    if let Some(max_kb) = settings.max_size_kb {
        let check = SizeLimit::new(max_kb).check(&modules);
        if !check.passed() {
            check.print_violations();
            return Err(ProfilerError::SizeLimitExceeded {
                max_kb,
                violations: check.violations,
            }
            .into());
        }
    }

    Ok(())
}

fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ProfilerError::PathNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    path.canonicalize()
        .map_err(|source| ProfilerError::Io {
            context: format!("resolving {}", path.display()),
            source,
        })
        .context("Failed to resolve project path")
}

fn print_modules(modules: &[ModuleRecord], format: OutputFormat, top: usize) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = report::to_json(modules).context("Failed to serialize modules to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let ranking = report::rank(modules, top);
            let hints = report::suggestions(ranking.records());
            let table = report::format_console_report(&ranking, &hints)
                .context("Failed to format report")?;
            print!("{}", table);
        }
    }
    Ok(())
}
