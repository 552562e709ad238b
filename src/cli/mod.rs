//! Command-line interface for Tally.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - The pipeline run command

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{CommandResult, RunCommand};
