//! Command handlers for the build-profiler CLI

pub mod completions;
pub mod profile;

pub use completions::cmd_completions;
pub use profile::{cmd_profile, OutputFormat, ProfileArgs, ResolvedSettings};
