use serde_json::Value;

use mkdist_domain::Target;

use crate::outcome::ExecutionOutcome;

/// Composes the rebuild outcome from its completed dependency outcomes.
///
/// Rebuild has no steps of its own; a failing dependency already became the
/// overall outcome before this runs.
pub(crate) fn summarize(completed: &[(Target, ExecutionOutcome)]) -> ExecutionOutcome {
    let mut steps = serde_json::Map::new();
    for (target, outcome) in completed {
        steps.insert(target.name().to_string(), outcome.details.clone());
    }

    let build_message = completed
        .iter()
        .find(|(target, _)| *target == Target::Build)
        .map(|(_, outcome)| outcome.message.as_str());
    let message = match build_message.and_then(|message| message.strip_prefix("mkdist build:")) {
        Some(rest) => format!("mkdist rebuild:{rest}"),
        None => "mkdist rebuild: clean and build completed".to_string(),
    };

    ExecutionOutcome::success(message, Value::Object(steps))
}
