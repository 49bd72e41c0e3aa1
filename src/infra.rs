//! Infrastructure traits for abstracting I/O operations.
//!
//! The aggregator reads build artifacts through [`FileSystem`] and starts the
//! bundler through [`CommandExecutor`], so both can be swapped for mocks in tests.

use std::fs::{Metadata, ReadDir};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Read-only view of the filesystem used while collecting build output.
pub trait FileSystem {
    /// Read the contents of a directory.
    fn read_dir(&self, path: &Path) -> io::Result<ReadDir>;

    /// Get metadata for a file or directory.
    fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether the path exists (file or directory).
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    /// Whether the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool {
        self.metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    /// Size of a regular file in bytes, `None` if it is missing or not a file.
    fn file_size(&self, path: &Path) -> Option<u64> {
        self.metadata(path)
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.len())
    }
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<ReadDir> {
        std::fs::read_dir(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        std::fs::metadata(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Trait for abstracting command execution.
///
/// The external bundler is only ever run for its side effects on disk, so
/// implementations are free to discard output.
pub trait CommandExecutor {
    /// Execute a command and return its exit status.
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus>;

    /// Whether `program` can be found on PATH.
    fn is_installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    /// Execute a command built with a closure, discarding stdout and stderr.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use build_profiler::infra::{CommandExecutor, RealCommandExecutor};
    ///
    /// let executor = RealCommandExecutor;
    /// let status = executor.run_quiet(|cmd| {
    ///     cmd.args(["next", "build"])
    ///        .env("ANALYZE", "true")
    /// }, "npx")?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    fn run_quiet<F>(&self, builder: F, program: &str) -> io::Result<ExitStatus>
    where
        F: FnOnce(&mut Command) -> &mut Command,
    {
        let mut cmd = Command::new(program);
        builder(&mut cmd);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self.status(&mut cmd)
    }
}

/// Real command executor that delegates to std::process::Command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus> {
        cmd.status()
    }
}

/// Create an ExitStatus with the given exit code for use in test mocks.
///
/// This avoids spawning actual processes (like `Command::new("true")`) in tests.
#[cfg(all(test, unix))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8) // Unix stores exit code in upper bits
}

#[cfg(all(test, windows))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}
