//! Target execution: dependency ordering plus the per-target step functions.

pub(crate) mod build;
pub(crate) mod clean;
pub(crate) mod help;
pub(crate) mod install;
pub(crate) mod rebuild;

use anyhow::Result;
use serde_json::json;

use mkdist_domain::Target;

use crate::config::GlobalOptions;
use crate::context::CommandContext;
use crate::messages::{is_missing_project_error, missing_project_outcome};
use crate::outcome::{CommandStatus, ExecutionOutcome};
use crate::process::{RunOutput, StdoutSink};

/// Runs a target: declared dependencies first, in order, then its own steps.
///
/// The first dependency that finishes with a non-`Ok` status becomes the
/// overall outcome and later steps never run.
///
/// # Errors
///
/// Returns an error for faults outside the outcome taxonomy, such as spawn
/// failures or filesystem errors.
pub fn execute(global: &GlobalOptions, target: Target) -> Result<ExecutionOutcome> {
    let ctx = CommandContext::new(global);
    match run_target(&ctx, target) {
        Ok(outcome) => Ok(outcome),
        Err(err) if is_missing_project_error(&err) => Ok(missing_project_outcome()),
        Err(err) => Err(err),
    }
}

fn run_target(ctx: &CommandContext, target: Target) -> Result<ExecutionOutcome> {
    tracing::debug!("running target {target}");
    let mut completed = Vec::new();
    for dep in target.deps() {
        let outcome = run_target(ctx, *dep)?;
        if outcome.status != CommandStatus::Ok {
            return Ok(outcome);
        }
        completed.push((*dep, outcome));
    }
    match target {
        Target::Help => Ok(help::list_targets()),
        Target::Build => build::build_distributions(ctx),
        Target::Clean => clean::remove_build_artifacts(ctx),
        Target::Install => install::install_newest_wheel(ctx),
        Target::Rebuild => Ok(rebuild::summarize(&completed)),
    }
}

/// Progress line printed before a target starts its work. Suppressed under
/// `--quiet` and `--json`; goes to stderr so stdout stays machine-readable.
pub(crate) fn status_note(global: &GlobalOptions, text: &str) {
    if global.quiet || global.json {
        return;
    }
    eprintln!("{text}");
}

/// Under `--json` the toolchain's stdout is rerouted to stderr, keeping
/// stdout reserved for the envelope.
pub(crate) fn toolchain_stdout_sink(global: &GlobalOptions) -> StdoutSink {
    if global.json {
        StdoutSink::Stderr
    } else {
        StdoutSink::Stdout
    }
}

/// Failure outcome for a toolchain process that exited non-zero.
pub(crate) fn tool_failure_outcome(step: &str, output: &RunOutput) -> ExecutionOutcome {
    let mut details = json!({
        "code": output.code,
        "stdout": output.stdout,
        "stderr": output.stderr,
    });
    if output.stderr.contains("No module named build") {
        details["hint"] = json!("install the build frontend first: python -m pip install build");
    }
    ExecutionOutcome::failure(format!("{step} exited with {}", output.code), details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolchain_failures_carry_code_and_hint() {
        let output = RunOutput {
            code: 3,
            stdout: String::new(),
            stderr: "/usr/bin/python3: No module named build\n".to_string(),
        };
        let outcome = tool_failure_outcome("python -m build", &output);
        assert_eq!(outcome.status, CommandStatus::Failure);
        assert_eq!(outcome.message, "python -m build exited with 3");
        assert_eq!(outcome.details["code"], 3);
        assert!(outcome.details["hint"]
            .as_str()
            .is_some_and(|hint| hint.contains("pip install build")));
    }

    #[test]
    fn failures_without_known_causes_have_no_hint() {
        let output = RunOutput {
            code: 1,
            stdout: String::new(),
            stderr: "error: metadata generation failed\n".to_string(),
        };
        let outcome = tool_failure_outcome("python -m build", &output);
        assert!(outcome.details.get("hint").is_none());
    }
}
