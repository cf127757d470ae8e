use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use mkdist_domain::current_project_root;

use crate::config::{Config, EnvSnapshot, GlobalOptions};

/// Shared state handed to every target: global flags, environment-derived
/// settings, and the lazily discovered project root.
pub struct CommandContext<'a> {
    pub global: &'a GlobalOptions,
    config: Config,
    project_root: OnceLock<PathBuf>,
}

impl<'a> CommandContext<'a> {
    #[must_use]
    pub fn new(global: &'a GlobalOptions) -> Self {
        let env = EnvSnapshot::capture();
        let config = Config::from_snapshot(&env);
        Self {
            global,
            config,
            project_root: OnceLock::new(),
        }
    }

    /// Resolves the project root, walking up from the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when no packaging manifest exists here or in any
    /// parent directory.
    pub fn project_root(&self) -> Result<PathBuf> {
        if let Some(path) = self.project_root.get() {
            Ok(path.clone())
        } else {
            let path = current_project_root()?;
            let _ = self.project_root.set(path.clone());
            Ok(path)
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn testing(global: &'a GlobalOptions, root: &std::path::Path) -> Self {
        let ctx = Self::new(global);
        let _ = ctx.project_root.set(root.to_path_buf());
        ctx
    }
}
