use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

use mkdist_domain::DistKind;

/// One distribution file reported back to the user after a build.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct ArtifactSummary {
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

/// Records the artifacts already in the output directory with their mtimes,
/// so a later pass can tell which files the toolchain produced.
pub(crate) fn snapshot_dist_state(dir: &Path) -> Result<HashMap<PathBuf, SystemTime>> {
    let mut state = HashMap::new();
    if !dir.exists() {
        return Ok(state);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || DistKind::classify(&path).is_none() {
            continue;
        }
        let modified = fs::metadata(&path)?.modified()?;
        state.insert(path, modified);
    }
    Ok(state)
}

/// Artifacts that appeared or changed since the `before` snapshot, sorted by path.
pub(crate) fn collect_produced(
    dir: &Path,
    before: &HashMap<PathBuf, SystemTime>,
) -> Result<Vec<PathBuf>> {
    let mut produced = Vec::new();
    for (path, modified) in snapshot_dist_state(dir)? {
        if before.get(&path) == Some(&modified) {
            continue;
        }
        produced.push(path);
    }
    produced.sort();
    Ok(produced)
}

pub(crate) fn summarize_artifacts(paths: &[PathBuf], root: &Path) -> Result<Vec<ArtifactSummary>> {
    let mut entries = Vec::new();
    for path in paths {
        let bytes = fs::metadata(path)
            .with_context(|| format!("reading metadata for {}", path.display()))?
            .len();
        let sha256 = compute_file_sha256(path)?;
        entries.push(ArtifactSummary {
            path: relative_path_str(path, root),
            bytes,
            sha256,
        });
    }
    Ok(entries)
}

/// The wheel with the newest mtime, breaking ties by filename descending.
pub(crate) fn newest_wheel(dir: &Path) -> Result<Option<PathBuf>> {
    if !dir.exists() {
        return Ok(None);
    }
    let mut wheels = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || DistKind::classify(&path) != Some(DistKind::Wheel) {
            continue;
        }
        let modified = fs::metadata(&path)?.modified()?;
        wheels.push((modified, path));
    }
    wheels.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    Ok(wheels.into_iter().map(|(_, path)| path).next())
}

pub(crate) fn compute_file_sha256(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).with_context(|| format!("hashing {}", path.display()))?;
    Ok(format!("{:x}", hasher.finalize()))
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    fn format_scaled(bytes: u64, unit: u64, suffix: &str) -> String {
        let whole = bytes / unit;
        let tenths = (bytes % unit) * 10 / unit;
        format!("{whole}.{tenths} {suffix}")
    }

    if bytes >= GB {
        format_scaled(bytes, GB, "GB")
    } else if bytes >= MB {
        format_scaled(bytes, MB, "MB")
    } else if bytes >= KB {
        format_scaled(bytes, KB, "KB")
    } else {
        format!("{bytes} B")
    }
}

pub(crate) fn relative_path_str(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
