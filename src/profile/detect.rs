//! Project kind detection from bundler config files

use std::path::Path;

use super::ProjectKind;
use crate::infra::FileSystem;

/// Detect the project kind from marker config files in `project_root`
///
/// Next.js markers win when both kinds are present.
///
/// # Examples
///
/// ```no_run
/// use build_profiler::infra::RealFileSystem;
/// use build_profiler::profile::{detect_project_kind, ProjectKind};
/// use std::path::Path;
///
/// if detect_project_kind(Path::new("."), &RealFileSystem) == Some(ProjectKind::Vite) {
///     println!("Vite project");
/// }
/// ```
pub fn detect_project_kind<FS: FileSystem>(project_root: &Path, fs: &FS) -> Option<ProjectKind> {
    [ProjectKind::Next, ProjectKind::Vite]
        .into_iter()
        .find(|kind| {
            kind.marker_files()
                .iter()
                .any(|marker| fs.exists(&project_root.join(marker)))
        })
}
