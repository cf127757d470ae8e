use std::collections::HashMap;
use std::env;

use serde::{Deserialize, Serialize};

/// Global flags shared by every target invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub json: bool,
}

/// Immutable snapshot of the process environment, captured once per run.
pub(crate) struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub(crate) fn capture() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Settings derived from the environment snapshot.
#[derive(Debug)]
pub struct Config {
    pub(crate) python: PythonConfig,
}

impl Config {
    pub(crate) fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        Self {
            python: PythonConfig {
                interpreter: snapshot
                    .var("MKDIST_PYTHON")
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(ToOwned::to_owned),
            },
        }
    }

    #[must_use]
    pub fn python(&self) -> &PythonConfig {
        &self.python
    }
}

/// Interpreter selection for the packaging toolchain.
#[derive(Debug, Clone)]
pub struct PythonConfig {
    /// Explicit interpreter path or name from `MKDIST_PYTHON`, when set.
    pub interpreter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_override_ignores_blank_values() {
        let snapshot = EnvSnapshot::testing(&[("MKDIST_PYTHON", "   ")]);
        assert_eq!(Config::from_snapshot(&snapshot).python().interpreter, None);

        let snapshot = EnvSnapshot::testing(&[("MKDIST_PYTHON", "/usr/local/bin/python3")]);
        assert_eq!(
            Config::from_snapshot(&snapshot).python().interpreter.as_deref(),
            Some("/usr/local/bin/python3")
        );

        let snapshot = EnvSnapshot::testing(&[]);
        assert_eq!(Config::from_snapshot(&snapshot).python().interpreter, None);
    }
}
