#![deny(clippy::all, warnings)]

mod core;

pub(crate) use crate::core::config::context;
pub(crate) use crate::core::tooling::{messages, outcome};
pub(crate) use crate::core::{artifacts, config, fs, interpreter, process};

pub use crate::core::config::context::CommandContext;
pub use crate::core::config::{Config, GlobalOptions, PythonConfig};
pub use crate::core::targets::execute;
pub use crate::core::tooling::messages::{format_status_message, to_json_response};
pub use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome};

pub use mkdist_domain::Target;
