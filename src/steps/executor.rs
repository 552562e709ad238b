//! Step invocation.
//!
//! [`StepInvoker`] is the seam between the runner and the outside world:
//! the runner only asks "run this step and tell me how it ended".
//! [`ProcessInvoker`] does that with real child processes.

use crate::error::Result;
use crate::shell::{execute, CommandOptions};
use crate::steps::step::Step;
use std::path::Path;
use std::time::Duration;

/// How a step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step exited with status 0.
    Completed,

    /// Step failed.
    Failed,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Result of invoking a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Position of the step.
    pub index: usize,

    /// Step name.
    pub name: String,

    /// Whether the step succeeded.
    pub success: bool,

    /// Exit code (None if the program never started or was killed).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

impl StepResult {
    /// Create a success result.
    pub fn success(step: &Step, duration: Duration) -> Self {
        Self {
            index: step.index,
            name: step.name.clone(),
            success: true,
            exit_code: Some(0),
            duration,
        }
    }

    /// Create a failure result.
    pub fn failure(step: &Step, exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            index: step.index,
            name: step.name.clone(),
            success: false,
            exit_code,
            duration,
        }
    }

    /// Build a result from a raw exit code, where 0 means success.
    pub fn from_exit_code(step: &Step, code: i32, duration: Duration) -> Self {
        if code == 0 {
            Self::success(step, duration)
        } else {
            Self::failure(step, Some(code), duration)
        }
    }

    /// Get the status of this result.
    pub fn status(&self) -> StepStatus {
        if self.success {
            StepStatus::Completed
        } else {
            StepStatus::Failed
        }
    }
}

/// Runs one step to completion.
pub trait StepInvoker {
    /// Run `step`, blocking until it has terminated.
    fn invoke(&mut self, step: &Step) -> Result<StepResult>;
}

impl<F> StepInvoker for F
where
    F: FnMut(&Step) -> Result<StepResult>,
{
    fn invoke(&mut self, step: &Step) -> Result<StepResult> {
        self(step)
    }
}

/// Invokes steps as child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessInvoker {
    options: CommandOptions,
}

impl ProcessInvoker {
    /// Create an invoker that runs steps in `working_dir`.
    pub fn new(working_dir: &Path) -> Self {
        Self {
            options: CommandOptions {
                cwd: Some(working_dir.to_path_buf()),
            },
        }
    }
}

impl StepInvoker for ProcessInvoker {
    fn invoke(&mut self, step: &Step) -> Result<StepResult> {
        match execute(&step.command, &self.options) {
            Ok(result) if result.success => Ok(StepResult::success(step, result.duration)),
            Ok(result) => Ok(StepResult::failure(step, result.exit_code, result.duration)),
            Err(e) => {
                // Could not start: same outcome as any other failing step.
                tracing::warn!("Could not start '{}': {}", step.command, e);
                Ok(StepResult::failure(step, None, Duration::ZERO))
            }
        }
    }
}
