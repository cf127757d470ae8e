use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;

mod common;

use common::{parse_json, prepare_project};

#[test]
fn clean_removes_artifacts_and_is_idempotent() {
    let (_temp, root) = prepare_project("mkdist-clean-");
    fs::create_dir_all(root.join("build")).expect("create build");
    fs::create_dir_all(root.join("dist")).expect("create dist");
    fs::create_dir_all(root.join("demo_dist.egg-info")).expect("create egg-info");

    cargo_bin_cmd!("mkdist")
        .current_dir(&root)
        .args(["clean"])
        .assert()
        .success();
    assert!(!root.join("build").exists());
    assert!(!root.join("dist").exists());
    assert!(!root.join("demo_dist.egg-info").exists());

    // Nothing left to remove, still exit 0.
    cargo_bin_cmd!("mkdist")
        .current_dir(&root)
        .args(["clean"])
        .assert()
        .success();
}

#[test]
fn clean_json_reports_removed_and_absent_paths() {
    let (_temp, root) = prepare_project("mkdist-clean-json-");
    fs::create_dir_all(root.join("dist")).expect("create dist");

    let assert = cargo_bin_cmd!("mkdist")
        .current_dir(&root)
        .args(["--json", "clean"])
        .assert()
        .success();
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["details"]["removed"], serde_json::json!(["dist"]));
    let absent = payload["details"]["absent"].as_array().expect("absent");
    assert!(absent.iter().any(|value| value == "build"));
}

#[test]
fn clean_resolves_the_project_root_from_a_subdirectory() {
    let (_temp, root) = prepare_project("mkdist-clean-nested-");
    let nested = root.join("src").join("demo_dist");
    fs::create_dir_all(&nested).expect("create nested dirs");
    fs::create_dir_all(root.join("dist")).expect("create dist");

    cargo_bin_cmd!("mkdist")
        .current_dir(&nested)
        .args(["clean"])
        .assert()
        .success();
    assert!(!root.join("dist").exists());
    assert!(nested.exists(), "source tree must survive clean");
}

#[test]
fn clean_outside_a_project_is_a_user_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let assert = cargo_bin_cmd!("mkdist")
        .current_dir(temp.path())
        .args(["--json", "clean"])
        .assert()
        .code(1);
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "user-error");
    assert_eq!(payload["details"]["reason"], "missing_project");
    assert!(payload["message"]
        .as_str()
        .expect("message")
        .contains("No Python project found"));
}
