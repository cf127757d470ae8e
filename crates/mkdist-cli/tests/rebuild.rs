#![cfg(unix)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

mod common;

use common::{parse_json, prepare_project, read_log, write_stub_python};

#[test]
fn rebuild_cleans_stale_artifacts_before_building() {
    let (temp, root) = prepare_project("mkdist-rebuild-");
    fs::create_dir_all(root.join("build")).expect("create build dir");
    let dist = root.join("dist");
    fs::create_dir_all(&dist).expect("create dist");
    let stale = dist.join("demo_dist-0.0.1-py3-none-any.whl");
    fs::write(&stale, b"stale wheel").expect("write stale wheel");

    let log = temp.path().join("invocations.log");
    let stub = write_stub_python(
        temp.path(),
        &log,
        "mkdir -p dist\n\
         printf sdist > dist/demo_dist-0.2.0.tar.gz\n\
         printf wheel > dist/demo_dist-0.2.0-py3-none-any.whl",
    );

    let assert = cargo_bin_cmd!("mkdist")
        .current_dir(&root)
        .env("MKDIST_PYTHON", &stub)
        .args(["--json", "rebuild"])
        .assert()
        .success();

    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    assert!(payload["message"]
        .as_str()
        .expect("message")
        .starts_with("mkdist rebuild:"));
    assert!(payload["details"]["clean"].is_object());
    let artifacts = payload["details"]["build"]["artifacts"]
        .as_array()
        .expect("build artifacts");
    assert_eq!(artifacts.len(), 2);

    assert!(!stale.exists(), "stale wheel must be removed first");
    assert!(!root.join("build").exists());
    assert!(dist.join("demo_dist-0.2.0-py3-none-any.whl").exists());

    let invocations = read_log(&log);
    assert_eq!(invocations.len(), 1, "only the build step spawns a process");
    assert!(invocations[0].contains("-m build"));
}

#[test]
fn rebuild_skips_the_build_when_no_project_is_found() {
    let temp = TempDir::with_prefix("mkdist-rebuild-noproject-").expect("create temp dir");
    let log = temp.path().join("invocations.log");
    let stub = write_stub_python(temp.path(), &log, "");

    let assert = cargo_bin_cmd!("mkdist")
        .current_dir(temp.path())
        .env("MKDIST_PYTHON", &stub)
        .args(["--json", "rebuild"])
        .assert()
        .code(1);

    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "user-error");
    assert_eq!(payload["details"]["reason"], "missing_project");
    assert!(
        read_log(&log).is_empty(),
        "build must not run after a failed clean step"
    );
}

#[test]
fn rebuild_propagates_a_build_failure_code() {
    let (temp, root) = prepare_project("mkdist-rebuild-fail-");
    fs::create_dir_all(root.join("build")).expect("create build dir");

    let log = temp.path().join("invocations.log");
    let stub = write_stub_python(temp.path(), &log, "echo 'frontend missing' >&2\nexit 5");

    cargo_bin_cmd!("mkdist")
        .current_dir(&root)
        .env("MKDIST_PYTHON", &stub)
        .args(["rebuild"])
        .assert()
        .code(5);

    assert!(
        !root.join("build").exists(),
        "clean step must run before the failing build"
    );
    assert_eq!(read_log(&log).len(), 1, "build attempted exactly once");
}
