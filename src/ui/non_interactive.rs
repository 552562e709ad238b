//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prints plain lines and never waits for the operator, so a failing
/// scheduled run exits right after reporting the failure.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn show_progress(&mut self, current: usize, total: usize, name: &str) {
        if self.mode.shows_progress() {
            eprintln!("[{}/{}] {}", current, total, name);
        }
    }

    fn acknowledge(&mut self, _prompt: &str) -> Result<()> {
        tracing::debug!("Skipping acknowledgment in non-interactive mode");
        Ok(())
    }
}
