//! End-to-end profiling of fake Next.js and Vite build output

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::assertions::{assert_approx_eq, assert_in_order, parse_module_array};
use common::fixtures;

fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_build-profiler"))
}

#[test]
fn test_next_merges_manifest_pages_and_webpack_modules() {
    let project = fixtures::next_project_with_build().expect("Failed to create test fixture");

    let output = get_bin()
        .arg(project.path())
        .args(["--format", "json"])
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let modules = parse_module_array(&output.stdout);
    let find = |name: &str| {
        modules
            .iter()
            .find(|m| m["name"] == name)
            .unwrap_or_else(|| panic!("{} missing from {:?}", name, modules))
    };

    assert_eq!(modules.len(), 4);
    assert_eq!(find("/")["size"], 4000);
    assert_eq!(find("/about")["size"], 1000, "missing files are skipped");
    assert_eq!(find("./node_modules/moment/moment.js")["size"], 256000);
    assert_approx_eq(
        find("./node_modules/moment/moment.js")["build_time"]
            .as_f64()
            .unwrap(),
        310.0,
        1e-9,
    );
    assert_approx_eq(find("/")["build_time"].as_f64().unwrap(), 4.0, 1e-9);
}

#[test]
fn test_next_table_suggests_moment_replacement() {
    let project = fixtures::next_project_with_build().expect("Failed to create test fixture");

    let output = get_bin()
        .arg(project.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_in_order(
        &stdout,
        &[
            "./node_modules/moment/moment.js",
            "./src/app.js",
            "/about",
            "Suggestions",
            "moment.js: Consider date-fns or dayjs (smaller)",
        ],
    );
}

#[test]
fn test_next_banner_names_framework() {
    let project = fixtures::next_project_with_build().expect("Failed to create test fixture");

    get_bin()
        .arg(project.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Type: Next.js"));
}

#[test]
fn test_vite_falls_back_to_bundle_files() {
    let project = fixtures::vite_project_with_bundles().expect("Failed to create test fixture");

    let output = get_bin()
        .arg(project.path())
        .args(["--format", "json"])
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let modules = parse_module_array(&output.stdout);
    let names: Vec<_> = modules
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["assets/index.js", "assets/lodash.js"]);
    assert_eq!(modules[1]["size"], 120 * 1024);
    assert_approx_eq(modules[0]["build_time"].as_f64().unwrap(), 2.048, 1e-9);
}

#[test]
fn test_vite_table_suggests_lodash_es() {
    let project = fixtures::vite_project_with_bundles().expect("Failed to create test fixture");

    get_bin()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "lodash: Use lodash-es or import specific functions",
        ))
        .stdout(predicate::str::contains("style.css").not());
}

#[test]
fn test_config_file_sets_defaults() {
    let project = fixtures::vite_project_with_meta().expect("Failed to create test fixture");
    fixtures::write_config(&project, "top = 1\nmax-size-kb = 200\n")
        .expect("Failed to write config");

    get_bin()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("assets/vendor.js").not());
}

#[test]
fn test_config_rate_scales_build_time_estimates() {
    let project = fixtures::vite_project_with_bundles().expect("Failed to create test fixture");
    fixtures::write_config(&project, "build-time-ms-per-kb = 2.0\n")
        .expect("Failed to write config");

    let output = get_bin()
        .arg(project.path())
        .args(["-f", "json"])
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let modules = parse_module_array(&output.stdout);
    assert_approx_eq(modules[0]["build_time"].as_f64().unwrap(), 4.096, 1e-9);
}

#[test]
fn test_flag_overrides_config_size_limit() {
    let project = fixtures::vite_project_with_meta().expect("Failed to create test fixture");
    fixtures::write_config(&project, "max-size-kb = 500\n").expect("Failed to write config");

    get_bin()
        .arg(project.path())
        .args(["--max-size", "100"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_config_is_reported() {
    let project = fixtures::vite_project_with_meta().expect("Failed to create test fixture");
    fixtures::write_config(&project, "unknown-key = true\n").expect("Failed to write config");

    get_bin()
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse .build-profiler.toml"));
}

#[test]
fn test_meta_file_takes_precedence_over_bundles() {
    let project = fixtures::vite_project_with_meta().expect("Failed to create test fixture");
    std::fs::write(project.path().join("dist/extra.js"), vec![b'x'; 10])
        .expect("Failed to write bundle");

    let output = get_bin()
        .arg(project.path())
        .args(["-f", "json"])
        .output()
        .expect("Command execution failed");

    let modules = parse_module_array(&output.stdout);
    assert!(modules.iter().all(|m| m["name"] != "extra.js"));
}

#[test]
fn test_json_follows_meta_document_order() {
    let project = fixtures::vite_project_without_output().expect("Failed to create test fixture");
    let dist = project.path().join("dist");
    std::fs::create_dir_all(&dist).expect("Failed to create dist");
    std::fs::write(
        dist.join("build.meta.json"),
        r#"{"outputs":{"z-last.js":{"bytes":10},"a-first.js":{"bytes":10},"m-mid.js":{"bytes":10}}}"#,
    )
    .expect("Failed to write meta file");

    let output = get_bin()
        .arg(project.path())
        .args(["-f", "json"])
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let names: Vec<_> = parse_module_array(&output.stdout)
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["z-last.js", "a-first.js", "m-mid.js"]);
}

#[test]
fn test_equal_sizes_keep_document_order_in_table() {
    let project = fixtures::vite_project_without_output().expect("Failed to create test fixture");
    let dist = project.path().join("dist");
    std::fs::create_dir_all(&dist).expect("Failed to create dist");
    std::fs::write(
        dist.join("build.meta.json"),
        r#"{"outputs":{"zeta.js":{"bytes":2048},"alpha.js":{"bytes":2048}}}"#,
    )
    .expect("Failed to write meta file");

    let output = get_bin()
        .arg(project.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_in_order(&stdout, &["zeta.js", "alpha.js"]);
}

#[test]
fn test_config_zero_size_limit_is_ignored() {
    let project = fixtures::vite_project_with_meta().expect("Failed to create test fixture");
    fixtures::write_config(&project, "max-size-kb = 0\n").expect("Failed to write config");

    get_bin().arg(project.path()).assert().success();
}
