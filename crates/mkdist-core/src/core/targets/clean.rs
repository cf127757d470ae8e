use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::json;

use mkdist_domain::ProjectSnapshot;

use super::status_note;
use crate::context::CommandContext;
use crate::fs::remove_path_all_writable;
use crate::outcome::ExecutionOutcome;

/// Removes `build/`, `dist/`, and the project's egg-info directory.
///
/// Absent paths are recorded but never an error, so running clean twice in a
/// row succeeds both times.
pub(crate) fn remove_build_artifacts(ctx: &CommandContext) -> Result<ExecutionOutcome> {
    status_note(ctx.global, "removing packaging artifacts");
    let root = ctx.project_root()?;
    let mut paths = vec![root.join("build"), root.join("dist")];
    paths.extend(egg_info_paths(&root)?);

    let mut removed = Vec::new();
    let mut absent = Vec::new();
    for path in &paths {
        let label = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        if fs::symlink_metadata(path).is_err() {
            absent.push(label);
            continue;
        }
        remove_path_all_writable(path)?;
        removed.push(label);
    }

    let message = if removed.is_empty() {
        "mkdist clean: nothing to remove".to_string()
    } else {
        format!("mkdist clean: removed {}", removed.join(", "))
    };
    Ok(ExecutionOutcome::success(
        message,
        json!({
            "removed": removed,
            "absent": absent,
        }),
    ))
}

/// Egg-info directories to remove: the one derived from the package name, or
/// every `*.egg-info` at the root when no name can be read.
fn egg_info_paths(root: &Path) -> Result<Vec<PathBuf>> {
    let named = match ProjectSnapshot::read_from(root) {
        Ok(snapshot) => snapshot.egg_info_dir(),
        Err(err) => {
            tracing::debug!("manifest unreadable during clean: {err:#}");
            None
        }
    };
    if let Some(dir) = named {
        return Ok(vec![dir]);
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(".egg-info"))
        {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
