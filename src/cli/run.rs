//! Run command implementation.
//!
//! Builds the step list from the CLI flags and hands it to the runner.

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::Result;
use crate::runner::PipelineRunner;
use crate::steps::{builtin_steps, ProcessInvoker, Step, StepInvoker};
use crate::ui::UserInterface;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: Cli,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Steps selected by the arguments.
    pub fn steps(&self) -> Vec<Step> {
        builtin_steps(self.args.term, &self.args.python)
    }

    /// Run the pipeline as child processes in the project root.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut invoker = ProcessInvoker::new(&self.project_root);
        self.execute_with(&mut invoker, ui)
    }

    /// Run the pipeline through a given invoker.
    pub fn execute_with(
        &self,
        invoker: &mut dyn StepInvoker,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!(
            "Running {} pipeline in {}",
            self.args.term.label(),
            self.project_root.display()
        );
        if ui.output_mode().shows_details() {
            ui.message(&format!("Working directory: {}", self.project_root.display()));
        }

        let runner = PipelineRunner::new(self.steps());
        let outcome = runner.run(invoker, ui)?;

        if outcome.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code()))
        }
    }
}
