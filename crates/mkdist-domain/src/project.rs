use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml_edit::DocumentMut;

/// Manifest files that mark the root of a Python project, in probe order.
pub const MANIFEST_FILES: [&str; 3] = ["pyproject.toml", "setup.py", "setup.cfg"];

/// A discovered project: its root, the manifest that marked it, and the
/// distribution name when `pyproject.toml` declares one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub root: PathBuf,
    pub manifest_path: PathBuf,
    pub name: Option<String>,
}

impl ProjectSnapshot {
    pub fn read_current() -> Result<Self> {
        let root = current_project_root()?;
        Self::read_from(&root)
    }

    pub fn read_from(root: &Path) -> Result<Self> {
        let manifest_path = MANIFEST_FILES
            .iter()
            .map(|file| root.join(file))
            .find(|path| path.exists())
            .ok_or_else(|| anyhow::anyhow!("no packaging manifest found in {}", root.display()))?;
        let name = project_name_from_pyproject(&root.join("pyproject.toml"))?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest_path,
            name,
        })
    }

    /// Directory setuptools writes package metadata into, when the name is known.
    #[must_use]
    pub fn egg_info_dir(&self) -> Option<PathBuf> {
        self.name
            .as_deref()
            .map(|name| self.root.join(egg_info_dir_name(name)))
    }
}

/// Resolves the project root for the current working directory.
pub fn current_project_root() -> Result<PathBuf> {
    discover_project_root()?.ok_or_else(|| {
        anyhow::anyhow!(
            "No Python project found. Run mkdist from a directory containing pyproject.toml, setup.py, or setup.cfg."
        )
    })
}

/// Walks up from the current directory looking for a packaging manifest.
pub fn discover_project_root() -> Result<Option<PathBuf>> {
    let mut dir = env::current_dir().context("unable to determine working directory")?;
    loop {
        if MANIFEST_FILES.iter().any(|file| dir.join(file).exists()) {
            tracing::debug!("project root at {}", dir.display());
            return Ok(Some(dir));
        }
        if !dir.pop() {
            return Ok(None);
        }
    }
}

/// Reads `[project].name` from a `pyproject.toml`, when both exist.
pub fn project_name_from_pyproject(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: DocumentMut = raw
        .parse()
        .with_context(|| format!("{} is not valid TOML", path.display()))?;
    Ok(doc
        .get("project")
        .and_then(|item| item.as_table())
        .and_then(|table| table.get("name"))
        .and_then(|item| item.as_str())
        .map(ToString::to_string))
}

/// Maps a distribution name to the egg-info directory setuptools derives from it.
///
/// Dashes and whitespace become underscores; everything else passes through.
#[must_use]
pub fn egg_info_dir_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|ch| if ch == '-' || ch.is_whitespace() { '_' } else { ch })
        .collect();
    format!("{safe}.egg-info")
}
