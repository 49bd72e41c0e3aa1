use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

use build_profiler::cmd::{self, OutputFormat, ProfileArgs};
use build_profiler::profile::ProjectKind;

/// Build-output profiler for Next.js and Vite
///
/// Reads the bundler's build artifacts, ranks the largest modules, and
/// suggests optimizations. Use --max-size to fail CI when a module grows
/// too large.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory to profile
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Treat the project as Next.js
    #[arg(long, conflicts_with = "vite")]
    next: bool,

    /// Treat the project as Vite
    #[arg(long)]
    vite: bool,

    /// Number of modules to show in the table
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Fail when any module exceeds this size in KB
    #[arg(long = "max-size", value_name = "KB")]
    max_size: Option<u64>,

    /// Never run the bundler; only read existing build output
    #[arg(long)]
    no_build: bool,

    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long)]
    no_emoji: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Cli {
    fn kind(&self) -> Option<ProjectKind> {
        if self.next {
            Some(ProjectKind::Next)
        } else if self.vite {
            Some(ProjectKind::Vite)
        } else {
            None
        }
    }

    fn profile_args(&self) -> ProfileArgs {
        ProfileArgs {
            path: self.path.clone(),
            kind: self.kind(),
            top: self.top,
            format: self.format,
            max_size_kb: self.max_size,
            no_build: self.no_build,
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    if let Some(shell) = cli.completions {
        cmd::cmd_completions(shell, &mut Cli::command());
        return;
    }

    if let Err(e) = cmd::cmd_profile(&cli.profile_args()) {
        use build_profiler::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
