//! Console output and failure notification.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! The outcome line of a run (success or failure message) is written to
//! stdout. Progress and details go to stderr.
//!
//! # Example
//!
//! ```
//! use tally::ui::{create_ui, OutputMode, UserInterface};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("done");
//! ui.acknowledge("press a key").unwrap();
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::format_duration;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, TallyTheme};

use crate::error::Result;

/// Shown while waiting for the operator after a failed step.
pub const PAUSE_PROMPT: &str = "続行するには何かキーを押してください . . .";

/// Trait for user interface interactions.
///
/// This trait allows swapping the interactive pause for CI and mocking
/// the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display the success line.
    fn success(&mut self, msg: &str);

    /// Display a failure line.
    fn error(&mut self, msg: &str);

    /// Show progress (e.g., "[2/3] merge_past_data").
    fn show_progress(&mut self, current: usize, total: usize, name: &str);

    /// Wait until the operator acknowledges, if anyone is there to do so.
    fn acknowledge(&mut self, prompt: &str) -> Result<()>;
}
