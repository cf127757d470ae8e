//! Core engine behind the mkdist CLI: configuration, target execution, and
//! process plumbing around the Python packaging toolchain.

pub mod artifacts;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod process;
pub mod targets;
pub mod tooling;
