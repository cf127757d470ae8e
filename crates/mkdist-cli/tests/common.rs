#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use serde_json::Value;
use tempfile::TempDir;

/// Creates a throwaway project whose pyproject names the `demo-dist` package.
pub fn prepare_project(prefix: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let root = temp.path().join("project");
    fs::create_dir_all(&root).expect("project root");
    fs::write(
        root.join("pyproject.toml"),
        r#"[project]
name = "demo-dist"
version = "0.1.0"
"#,
    )
    .expect("write pyproject");
    (temp, root)
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout is valid json")
}

pub fn stdout_text(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is utf-8")
}

pub fn stderr_text(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("stderr is utf-8")
}

/// Writes an executable script standing in for the Python interpreter.
///
/// Every invocation appends its arguments to `log` before running `body`,
/// so tests can assert which toolchain commands ran.
#[cfg(unix)]
pub fn write_stub_python(dir: &Path, log: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("python-stub");
    let script = format!(
        "#!/bin/sh\nset -eu\nprintf '%s\\n' \"$*\" >> \"{}\"\n{}\n",
        log.display(),
        body
    );
    fs::write(&path, script).expect("write stub interpreter");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("mark stub executable");
    path
}

#[cfg(unix)]
pub fn read_log(log: &Path) -> Vec<String> {
    if !log.exists() {
        return Vec::new();
    }
    fs::read_to_string(log)
        .expect("read stub log")
        .lines()
        .map(ToString::to_string)
        .collect()
}
