//! Best-effort invocation of the project's bundler
//!
//! The aggregator only cares about what the build leaves on disk, so every
//! outcome here is advisory: callers log the result and move on.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use thiserror::Error;

use super::ProjectKind;
use crate::fmt::HAMMER;
use crate::infra::{CommandExecutor, RealCommandExecutor};

/// Errors reported by a build attempt
#[derive(Error, Debug)]
pub enum BuildError {
    /// `npx` is not on PATH
    #[error("Tool not installed: {0}")]
    ToolMissing(String),

    /// The build process could not be started
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The build process exited unsuccessfully
    #[error("`{command}` exited with status {code:?}")]
    Failed {
        /// Command line that was run
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },
}

/// Runs the external build for a project
pub trait BuildRunner {
    /// Build the project in `project_root`
    ///
    /// `analyze` requests the bundler's profiling mode where supported.
    fn build(&self, kind: ProjectKind, project_root: &Path, analyze: bool) -> Result<(), BuildError>;
}

/// Builds projects with `npx next build` / `npx vite build`
pub struct NpxBuildRunner<CE: CommandExecutor = RealCommandExecutor> {
    cmd_executor: CE,
    show_progress: bool,
}

impl NpxBuildRunner<RealCommandExecutor> {
    /// Create a runner that spawns real processes
    pub fn new(show_progress: bool) -> Self {
        Self::with_executor(RealCommandExecutor, show_progress)
    }
}

impl<CE: CommandExecutor> NpxBuildRunner<CE> {
    /// Create a runner with a custom command executor
    pub fn with_executor(cmd_executor: CE, show_progress: bool) -> Self {
        Self {
            cmd_executor,
            show_progress,
        }
    }

    fn spinner(&self, kind: ProjectKind) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("{} Running {}", HAMMER, kind.build_command()));
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}

impl<CE: CommandExecutor> BuildRunner for NpxBuildRunner<CE> {
    fn build(&self, kind: ProjectKind, project_root: &Path, analyze: bool) -> Result<(), BuildError> {
        if !self.cmd_executor.is_installed("npx") {
            return Err(BuildError::ToolMissing("npx".to_string()));
        }

        let command = kind.build_command();
        let with_analyze = analyze && kind.supports_analyze();
        debug!(
            "Running `{}` in {} (ANALYZE={})",
            command,
            project_root.display(),
            with_analyze
        );

        let spinner = self.spinner(kind);
        let result = self.cmd_executor.run_quiet(
            |cmd| {
                cmd.current_dir(project_root).args(kind.build_args());
                if with_analyze {
                    cmd.env("ANALYZE", "true");
                }
                cmd
            },
            "npx",
        );
        spinner.finish_and_clear();

        let status = result?;
        if status.success() {
            Ok(())
        } else {
            Err(BuildError::Failed {
                command,
                code: status.code(),
            })
        }
    }
}
