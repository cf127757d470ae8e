use std::fmt;
use std::str::FromStr;

/// A named unit of work from the runner's command table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Help,
    Build,
    Clean,
    Install,
    Rebuild,
}

impl Target {
    /// Every registered target, in declaration order.
    pub const ALL: [Target; 5] = [
        Target::Help,
        Target::Build,
        Target::Clean,
        Target::Install,
        Target::Rebuild,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Target::Help => "help",
            Target::Build => "build",
            Target::Clean => "clean",
            Target::Install => "install",
            Target::Rebuild => "rebuild",
        }
    }

    /// One-line description shown in the help table.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Target::Help => "Show available targets with their descriptions.",
            Target::Build => "Build the source distribution and wheel into dist/.",
            Target::Clean => "Remove build/, dist/, and egg-info artifacts.",
            Target::Install => "Install the most recently built wheel from dist/.",
            Target::Rebuild => "Run clean, then build, stopping on the first failure.",
        }
    }

    /// Targets that must complete successfully, in order, before this one runs.
    #[must_use]
    pub fn deps(self) -> &'static [Target] {
        match self {
            Target::Rebuild => &[Target::Clean, Target::Build],
            _ => &[],
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = UnknownTargetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|target| target.name() == raw)
            .ok_or_else(|| UnknownTargetError(raw.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown target `{0}`; run `mkdist help` to list targets")]
pub struct UnknownTargetError(String);
