use std::path::Path;

use serde_json::{json, Value};

use mkdist_domain::Target;

use crate::outcome::{CommandStatus, ExecutionOutcome};

pub(crate) const MISSING_PROJECT_MESSAGE: &str = "No Python project found.";
pub(crate) const MISSING_PROJECT_HINT: &str =
    "Run mkdist inside a directory containing pyproject.toml, setup.py, or setup.cfg.";

pub(crate) fn missing_project_outcome() -> ExecutionOutcome {
    ExecutionOutcome::user_error(
        MISSING_PROJECT_MESSAGE,
        json!({
            "reason": "missing_project",
            "hint": MISSING_PROJECT_HINT,
        }),
    )
}

/// Matches the discovery error raised when no packaging manifest is found.
pub(crate) fn is_missing_project_error(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.to_string().contains("No Python project found"))
}

pub(crate) fn missing_wheel_outcome(dist: &Path) -> ExecutionOutcome {
    ExecutionOutcome::user_error(
        "no wheel found in dist/",
        json!({
            "reason": "missing_wheel",
            "dist_dir": dist.display().to_string(),
            "hint": "run `mkdist build` to produce a wheel first",
        }),
    )
}

pub(crate) fn missing_interpreter_outcome() -> ExecutionOutcome {
    ExecutionOutcome::user_error(
        "no usable Python interpreter found",
        json!({
            "reason": "missing_interpreter",
            "hint": "install Python 3 or point MKDIST_PYTHON at an interpreter",
        }),
    )
}

/// Serializes an outcome into the `{status, message, details}` envelope
/// emitted under `--json`.
#[must_use]
pub fn to_json_response(target: Target, outcome: &ExecutionOutcome) -> Value {
    let status = match outcome.status {
        CommandStatus::Ok => "ok",
        CommandStatus::UserError => "user-error",
        CommandStatus::Failure => "error",
    };
    let details = match &outcome.details {
        Value::Object(_) => outcome.details.clone(),
        Value::Null => json!({}),
        other => json!({ "value": other }),
    };
    json!({
        "status": status,
        "message": format_status_message(target, &outcome.message),
        "details": details,
    })
}

/// Prefixes a message with `mkdist <target>` unless a target already did so.
///
/// Messages produced by a dependency keep their own prefix, so a rebuild
/// reporting its build step stays labeled `mkdist build`.
#[must_use]
pub fn format_status_message(target: Target, message: &str) -> String {
    let prefix = format!("mkdist {target}");
    if message.is_empty() {
        prefix
    } else if message.starts_with("mkdist ") {
        message.to_string()
    } else {
        format!("{prefix}: {message}")
    }
}
