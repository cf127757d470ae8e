use std::fs;

use anyhow::{Context, Result};
use serde_json::json;

use super::{status_note, tool_failure_outcome, toolchain_stdout_sink};
use crate::artifacts::{
    collect_produced, format_bytes, relative_path_str, snapshot_dist_state, summarize_artifacts,
};
use crate::context::CommandContext;
use crate::interpreter::resolve_python;
use crate::outcome::ExecutionOutcome;
use crate::process::run_command_streaming;

/// Drives `python -m build` to produce an sdist and a wheel under `dist/`.
pub(crate) fn build_distributions(ctx: &CommandContext) -> Result<ExecutionOutcome> {
    status_note(ctx.global, "building sdist and wheel");
    let root = ctx.project_root()?;
    let python = match resolve_python(ctx) {
        Ok(python) => python,
        Err(outcome) => return Ok(outcome),
    };

    let out_dir = root.join("dist");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory at {}", out_dir.display()))?;
    let before = snapshot_dist_state(&out_dir)?;

    let args: Vec<String> = ["-m", "build", "--sdist", "--wheel", "--outdir", "dist"]
        .iter()
        .map(ToString::to_string)
        .collect();
    tracing::debug!("running {python} -m build in {}", root.display());
    let output = run_command_streaming(&python, &args, &root, toolchain_stdout_sink(ctx.global))?;
    if output.code != 0 {
        return Ok(tool_failure_outcome("python -m build", &output));
    }

    let produced = collect_produced(&out_dir, &before)?;
    let artifacts = summarize_artifacts(&produced, &root)?;
    if artifacts.is_empty() {
        return Ok(ExecutionOutcome::user_error(
            "mkdist build: build completed but produced no artifacts",
            json!({ "out_dir": relative_path_str(&out_dir, &root) }),
        ));
    }

    let message = if let [only] = artifacts.as_slice() {
        let sha_short: String = only.sha256.chars().take(12).collect();
        format!(
            "mkdist build: wrote {} ({}, sha256={}…)",
            only.path,
            format_bytes(only.bytes),
            sha_short
        )
    } else {
        let total: u64 = artifacts.iter().map(|artifact| artifact.bytes).sum();
        format!(
            "mkdist build: wrote {} artifacts to {} ({})",
            artifacts.len(),
            relative_path_str(&out_dir, &root),
            format_bytes(total)
        )
    };
    let details = json!({
        "artifacts": artifacts,
        "out_dir": relative_path_str(&out_dir, &root),
        "code": output.code,
    });
    Ok(ExecutionOutcome::success(message, details))
}
