//! Test fixture helpers for creating fake frontend projects
//!
//! Each fixture writes the marker config file and, where noted, a build
//! output directory shaped like the bundler's real output. No bundler is
//! ever run.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

fn write(path: &Path, contents: impl AsRef<[u8]>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// A Next.js project with only `next.config.js`, no `.next/` yet
pub fn next_project_without_output() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir.path().join("next.config.js"),
        "module.exports = {}\n",
    )?;
    Ok(temp_dir)
}

/// A Vite project with only `vite.config.js`, no `dist/` yet
pub fn vite_project_without_output() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    write(
        &temp_dir.path().join("vite.config.js"),
        "export default {}\n",
    )?;
    Ok(temp_dir)
}

/// A Next.js project with a build manifest and webpack stats
///
/// Produces:
/// - `/` (manifest): 3000 + 1000 bytes of static files
/// - `/about` (manifest): 1000 bytes
/// - `./node_modules/moment/moment.js` (stats): 250 KB
/// - `./src/app.js` (stats): 4 KB
pub fn next_project_with_build() -> anyhow::Result<TempDir> {
    let temp_dir = next_project_without_output()?;
    let next_dir = temp_dir.path().join(".next");

    write(
        &next_dir.join("build-manifest.json"),
        r#"{
  "pages": {
    "/": ["static/chunks/main.js", "static/chunks/framework.js"],
    "/about": ["static/chunks/framework.js", "static/chunks/missing.js"]
  }
}"#,
    )?;
    write(&next_dir.join("static/static/chunks/main.js"), vec![b'm'; 3000])?;
    write(
        &next_dir.join("static/static/chunks/framework.js"),
        vec![b'f'; 1000],
    )?;
    write(
        &next_dir.join("server/webpack-stats.json"),
        r#"{
  "modules": [
    { "name": "./node_modules/moment/moment.js", "size": 256000, "profile": { "total": 310 }, "chunks": [0] },
    { "name": "./src/app.js", "size": 4096, "profile": { "total": 12 }, "chunks": ["main"] }
  ]
}"#,
    )?;

    Ok(temp_dir)
}

/// A Vite project whose `dist/` carries a Rollup meta file
///
/// Produces `assets/index.js` (150 KB) and `assets/vendor.js` (50 KB).
pub fn vite_project_with_meta() -> anyhow::Result<TempDir> {
    let temp_dir = vite_project_without_output()?;
    write(
        &temp_dir.path().join("dist/stats.meta.json"),
        r#"{
  "outputs": {
    "assets/index.js": { "bytes": 153600 },
    "assets/vendor.js": { "bytes": 51200 }
  }
}"#,
    )?;
    Ok(temp_dir)
}

/// A Vite project whose `dist/` has bundles but no meta file
///
/// Produces `assets/index.js` (2048 bytes), `assets/lodash.js` (120 KB)
/// and a stylesheet that is not profiled.
pub fn vite_project_with_bundles() -> anyhow::Result<TempDir> {
    let temp_dir = vite_project_without_output()?;
    let dist = temp_dir.path().join("dist");
    write(&dist.join("assets/index.js"), vec![b'i'; 2048])?;
    write(&dist.join("assets/lodash.js"), vec![b'l'; 120 * 1024])?;
    write(&dist.join("assets/style.css"), vec![b'c'; 4096])?;
    write(&dist.join("index.html"), "<html></html>")?;
    Ok(temp_dir)
}

/// A directory with build output but no recognizable config file
pub fn unrecognized_project() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    write(&temp_dir.path().join("package.json"), "{}")?;
    write(&temp_dir.path().join("dist/index.js"), vec![b'x'; 100])?;
    Ok(temp_dir)
}

/// Write `.build-profiler.toml` into an existing project
pub fn write_config(project: &TempDir, contents: &str) -> anyhow::Result<()> {
    write(&project.path().join(".build-profiler.toml"), contents)
}
