//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use build_profiler::error::ProfilerError;
//! use build_profiler::profile::ProjectKind;
//!
//! let err = ProfilerError::NoBuildOutput { kind: ProjectKind::Vite };
//! assert_eq!(err.exit_code(), 1);
//! assert!(err.suggestion().unwrap().contains("npx vite build"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::cicd::SizeViolation;
use crate::profile::ProjectKind;

/// build-profiler errors with contextual suggestions
#[derive(Error, Debug)]
pub enum ProfilerError {
    /// Neither Next.js nor Vite config files were found
    #[error("Could not detect project type in {path}")]
    ProjectKindUndetected {
        /// Project root that was inspected
        path: PathBuf,
    },

    /// No build output could be found or produced
    #[error("No build output found for {kind} project")]
    NoBuildOutput {
        /// Project kind that was profiled
        kind: ProjectKind,
    },

    /// One or more modules exceed the configured size limit
    #[error("{} module(s) exceed the {max_kb}KB size limit", .violations.len())]
    SizeLimitExceeded {
        /// Limit in KB
        max_kb: u64,
        /// Offending modules
        violations: Vec<SizeViolation>,
    },

    /// `--top` was given an unusable value
    #[error("Invalid --top value: {value}")]
    InvalidTopN {
        /// The rejected value
        value: usize,
    },

    /// Project path does not exist
    #[error("Path not found: {path}")]
    PathNotFound {
        /// Missing path
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ProfilerError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectKindUndetected { .. } => {
                Some("Use --next or --vite to choose the project type".to_string())
            }
            Self::NoBuildOutput { .. } => Some(format!(
                "Run the build first:\n  Next.js: {}\n  Vite: {}",
                ProjectKind::Next.build_command(),
                ProjectKind::Vite.build_command()
            )),
            Self::SizeLimitExceeded { max_kb, .. } => Some(format!(
                "Code-split the modules listed above or raise --max-size above {}",
                max_kb
            )),
            Self::InvalidTopN { .. } => Some("--top must be at least 1".to_string()),
            Self::PathNotFound { path } => {
                Some(format!("Check that {} exists", path.display()))
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProjectKindUndetected { .. } => 64, // EX_USAGE
            Self::NoBuildOutput { .. } => 1,
            Self::SizeLimitExceeded { .. } => 1, // CI should fail
            Self::InvalidTopN { .. } => 64,      // EX_USAGE
            Self::PathNotFound { .. } => 66,     // EX_NOINPUT
            Self::Io { .. } => 74,               // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(profiler_error) = error.downcast_ref::<ProfilerError>() {
            if let Some(suggestion) = profiler_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(profiler_error) = error.downcast_ref::<ProfilerError>() {
            profiler_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
