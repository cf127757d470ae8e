use crate::context::CommandContext;
use crate::messages::missing_interpreter_outcome;
use crate::outcome::ExecutionOutcome;

const INTERPRETER_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Resolve the interpreter that drives the packaging toolchain.
///
/// `MKDIST_PYTHON` wins when set; otherwise the first candidate found on
/// `PATH` is used. The error carries a ready-made user outcome.
pub(crate) fn resolve_python(ctx: &CommandContext) -> Result<String, ExecutionOutcome> {
    if let Some(python) = ctx.config().python().interpreter.clone() {
        tracing::debug!("using interpreter override {python}");
        return Ok(python);
    }
    for candidate in INTERPRETER_CANDIDATES {
        if let Ok(path) = which::which(candidate) {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    Err(missing_interpreter_outcome())
}
