#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod artifact;
pub mod project;
pub mod target;

pub use artifact::{parse_wheel_filename, DistKind, WheelName, WheelNameError};
pub use project::{
    current_project_root, discover_project_root, egg_info_dir_name, project_name_from_pyproject,
    ProjectSnapshot, MANIFEST_FILES,
};
pub use target::{Target, UnknownTargetError};
