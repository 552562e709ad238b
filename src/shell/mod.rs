//! External program execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{has_terminal, is_ci};
