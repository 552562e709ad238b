//! Fail-fast pipeline execution.

use crate::error::{PipelineError, Result};
use crate::steps::{Step, StepInvoker, StepResult, SUCCESS_MESSAGE};
use crate::ui::{format_duration, UserInterface, PAUSE_PROMPT};
use anyhow::anyhow;
use std::time::{Duration, Instant};

use super::state::PipelineState;

/// Progress event emitted during pipeline execution.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting { step: &'a Step, total: usize },
    /// A step finished.
    StepFinished {
        step: &'a Step,
        result: &'a StepResult,
    },
}

/// Result of running a pipeline.
#[derive(Debug)]
pub struct RunOutcome {
    /// Terminal state reached.
    pub state: PipelineState,
    /// Results of the steps that ran, in order.
    pub steps: Vec<StepResult>,
    /// The step failure that stopped the run, if any.
    pub failure: Option<PipelineError>,
    /// Total duration.
    pub duration: Duration,
}

impl RunOutcome {
    /// Whether every step succeeded.
    pub fn success(&self) -> bool {
        self.state == PipelineState::Succeeded
    }

    /// Process exit code: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> u8 {
        self.state.exit_code()
    }

    /// Position of the failed step, if the run failed.
    pub fn failed_step(&self) -> Option<usize> {
        match self.state {
            PipelineState::Failed(i) => Some(i),
            _ => None,
        }
    }

    /// Positions of the steps that were invoked, in order.
    pub fn invoked(&self) -> Vec<usize> {
        self.steps.iter().map(|r| r.index).collect()
    }
}

/// Runs an ordered list of steps, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct PipelineRunner {
    steps: Vec<Step>,
    success_message: String,
    pause_prompt: String,
}

impl PipelineRunner {
    /// Create a runner for `steps`, executed in the given order.
    ///
    /// Each step's index is reset to its 1-based position in `steps`.
    pub fn new(mut steps: Vec<Step>) -> Self {
        for (position, step) in (1..).zip(steps.iter_mut()) {
            if step.index != position {
                tracing::debug!(
                    "Step '{}' renumbered from {} to {}",
                    step.name,
                    step.index,
                    position
                );
                step.index = position;
            }
        }

        Self {
            steps,
            success_message: SUCCESS_MESSAGE.to_string(),
            pause_prompt: PAUSE_PROMPT.to_string(),
        }
    }

    /// Override the line printed when every step succeeds.
    pub fn with_success_message(mut self, msg: impl Into<String>) -> Self {
        self.success_message = msg.into();
        self
    }

    /// Override the prompt shown while waiting after a failure.
    pub fn with_pause_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.pause_prompt = prompt.into();
        self
    }

    /// The steps this runner executes.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run the pipeline.
    pub fn run(
        &self,
        invoker: &mut dyn StepInvoker,
        ui: &mut dyn UserInterface,
    ) -> Result<RunOutcome> {
        self.run_with_progress(invoker, ui, |_| {})
    }

    /// Run the pipeline with a progress callback.
    ///
    /// Step failures are reported through the UI and the returned
    /// [`RunOutcome`]; an `Err` means the runner itself misbehaved.
    pub fn run_with_progress(
        &self,
        invoker: &mut dyn StepInvoker,
        ui: &mut dyn UserInterface,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> Result<RunOutcome> {
        let start = Instant::now();
        let total = self.steps.len();
        let mut results = Vec::with_capacity(total);
        let mut failure = None;

        tracing::info!("Starting pipeline with {} steps", total);

        let mut state = transition(PipelineState::Idle, |s| s.start(total))?;

        for step in &self.steps {
            if state.is_terminal() {
                break;
            }

            ui.show_progress(step.index, total, &step.name);
            if ui.output_mode().shows_details() {
                ui.message(&format!("  $ {}", step.command));
            }
            on_progress(RunProgress::StepStarting { step, total });

            let result = invoke(invoker, step);
            on_progress(RunProgress::StepFinished {
                step,
                result: &result,
            });

            if ui.output_mode().shows_details() {
                ui.message(&format!("  ({})", format_duration(result.duration)));
            }
            tracing::debug!(
                "Step {} ({}) finished: {} in {:?}",
                step.index,
                step.name,
                result.status(),
                result.duration
            );

            let outcome = check(step, &result);
            state = transition(state, |s| s.step_finished(result.success, total))?;
            results.push(result);

            if let Err(err) = outcome {
                tracing::info!("{}", err);
                failure = Some(err);
            }
        }

        match state {
            PipelineState::Succeeded => {
                ui.success(&self.success_message);
            }
            PipelineState::Failed(i) => {
                let step = &self.steps[i - 1];
                ui.error(&step.failure_message);
                if let Err(e) = ui.acknowledge(&self.pause_prompt) {
                    tracing::warn!("Could not wait for acknowledgment: {}", e);
                }
            }
            other => {
                return Err(anyhow!("pipeline stopped in non-terminal state: {}", other).into());
            }
        }

        let duration = start.elapsed();
        tracing::info!("Pipeline {} in {:?}", state, duration);

        Ok(RunOutcome {
            state,
            steps: results,
            failure,
            duration,
        })
    }
}

/// Run one step; an invoker error counts as a failed step.
fn invoke(invoker: &mut dyn StepInvoker, step: &Step) -> StepResult {
    match invoker.invoke(step) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Step {} ({}) could not be invoked: {}", step.index, step.name, e);
            StepResult::failure(step, None, Duration::ZERO)
        }
    }
}

/// Map a step result onto the pipeline's single failure kind.
fn check(step: &Step, result: &StepResult) -> Result<()> {
    if result.success {
        Ok(())
    } else {
        Err(PipelineError::StepFailed {
            index: step.index,
            command: step.command.to_string(),
            code: result.exit_code,
        })
    }
}

fn transition(
    state: PipelineState,
    f: impl FnOnce(PipelineState) -> Option<PipelineState>,
) -> Result<PipelineState> {
    f(state).ok_or_else(|| anyhow!("invalid pipeline transition from {}", state).into())
}
