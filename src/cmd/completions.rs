//! Completions command implementation
//!
//! Handles `build-profiler --completions <SHELL>`, which prints a shell
//! completion script for the CLI.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

const BIN_NAME: &str = "build-profiler";

/// Generate shell completion scripts
///
/// Outputs the completion script for `shell` to stdout. The command tree
/// comes from the binary's parser so the script always matches its flags.
///
/// # Examples
///
/// ```bash
/// # Bash
/// build-profiler --completions bash > /etc/bash_completion.d/build-profiler
///
/// # Zsh
/// build-profiler --completions zsh > ~/.zfunc/_build-profiler
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    generate(shell, cmd, BIN_NAME, out);
}
