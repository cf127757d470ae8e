use serde_json::json;

use mkdist_domain::Target;

use crate::outcome::ExecutionOutcome;

/// Describes every registered target, sorted by name for the help table.
pub(crate) fn list_targets() -> ExecutionOutcome {
    let mut targets: Vec<Target> = Target::ALL.to_vec();
    targets.sort_by_key(|target| target.name());

    let rows: Vec<_> = targets
        .iter()
        .map(|target| {
            let depends_on: Vec<&str> = target.deps().iter().map(|dep| dep.name()).collect();
            json!({
                "name": target.name(),
                "summary": target.summary(),
                "depends_on": depends_on,
            })
        })
        .collect();

    ExecutionOutcome::success("available targets", json!({ "targets": rows }))
}
