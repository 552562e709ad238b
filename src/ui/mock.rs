//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use tally::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("step failed");
//! ui.acknowledge("press a key").unwrap();
//!
//! assert_eq!(ui.errors(), ["step failed".to_string()]);
//! assert_eq!(ui.acknowledgments(), ["press a key".to_string()]);
//! ```

use crate::error::{PipelineError, Result};

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    progress: Vec<(usize, usize, String)>,
    acknowledgments: Vec<String>,
    fail_acknowledge: bool,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Make `acknowledge` fail, as if the terminal went away.
    pub fn fail_acknowledge(&mut self) {
        self.fail_acknowledge = true;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all progress updates as (current, total, name).
    pub fn progress(&self) -> &[(usize, usize, String)] {
        &self.progress
    }

    /// Get the prompt of every acknowledgment requested.
    pub fn acknowledgments(&self) -> &[String] {
        &self.acknowledgments
    }

    /// Outcome lines in the order they would reach stdout.
    pub fn outcome_lines(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(self.successes.iter())
            .cloned()
            .collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize, name: &str) {
        self.progress.push((current, total, name.to_string()));
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        self.acknowledgments.push(prompt.to_string());
        if self.fail_acknowledge {
            return Err(PipelineError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "terminal closed",
            )));
        }
        Ok(())
    }
}
