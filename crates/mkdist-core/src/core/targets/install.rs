use anyhow::Result;
use serde_json::json;

use mkdist_domain::parse_wheel_filename;

use super::{tool_failure_outcome, toolchain_stdout_sink};
use crate::artifacts::{newest_wheel, relative_path_str};
use crate::context::CommandContext;
use crate::interpreter::resolve_python;
use crate::messages::missing_wheel_outcome;
use crate::outcome::ExecutionOutcome;
use crate::process::run_command_streaming;

/// Installs the most recently modified wheel from `dist/` via `pip install`.
///
/// When no wheel exists the installer is never invoked.
pub(crate) fn install_newest_wheel(ctx: &CommandContext) -> Result<ExecutionOutcome> {
    let root = ctx.project_root()?;
    let dist = root.join("dist");
    let Some(wheel) = newest_wheel(&dist)? else {
        return Ok(missing_wheel_outcome(&dist));
    };
    let python = match resolve_python(ctx) {
        Ok(python) => python,
        Err(outcome) => return Ok(outcome),
    };

    let wheel_arg = wheel.display().to_string();
    let args = vec![
        "-m".to_string(),
        "pip".to_string(),
        "install".to_string(),
        wheel_arg.clone(),
    ];
    tracing::debug!("installing {wheel_arg} with {python}");
    let output = run_command_streaming(&python, &args, &root, toolchain_stdout_sink(ctx.global))?;
    if output.code != 0 {
        return Ok(tool_failure_outcome("python -m pip install", &output));
    }

    let rel = relative_path_str(&wheel, &root);
    let mut details = json!({
        "wheel": rel,
        "code": output.code,
    });
    if let Some(parsed) = wheel
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| parse_wheel_filename(name).ok())
    {
        details["distribution"] = json!(parsed.distribution);
        details["version"] = json!(parsed.version);
    }
    Ok(ExecutionOutcome::success(
        format!("mkdist install: installed {rel}"),
        details,
    ))
}
