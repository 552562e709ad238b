//! Pipeline state machine.

use std::fmt;

/// Where a pipeline run currently stands.
///
/// `Failed` and `Succeeded` are terminal. Step positions are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// Step `i` is executing.
    RunningStep(usize),
    /// Step `i` failed; later steps never ran.
    Failed(usize),
    /// Every step succeeded.
    Succeeded,
}

impl PipelineState {
    /// Check if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Succeeded)
    }

    /// Leave `Idle` for a pipeline of `total` steps.
    ///
    /// An empty pipeline succeeds immediately. Returns `None` unless idle.
    pub fn start(self, total: usize) -> Option<Self> {
        match self {
            Self::Idle if total == 0 => Some(Self::Succeeded),
            Self::Idle => Some(Self::RunningStep(1)),
            _ => None,
        }
    }

    /// Record how the running step ended.
    ///
    /// Returns `None` if no step is running or the position is out of range.
    pub fn step_finished(self, success: bool, total: usize) -> Option<Self> {
        match self {
            Self::RunningStep(i) if i == 0 || i > total => None,
            Self::RunningStep(i) if !success => Some(Self::Failed(i)),
            Self::RunningStep(i) if i < total => Some(Self::RunningStep(i + 1)),
            Self::RunningStep(_) => Some(Self::Succeeded),
            _ => None,
        }
    }

    /// Exit code for a terminal state: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Succeeded => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::RunningStep(i) => write!(f, "running step {}", i),
            Self::Failed(i) => write!(f, "failed at step {}", i),
            Self::Succeeded => write!(f, "succeeded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_starts_at_step_one() {
        assert_eq!(
            PipelineState::Idle.start(3),
            Some(PipelineState::RunningStep(1))
        );
    }

    #[test]
    fn empty_pipeline_succeeds_on_start() {
        assert_eq!(PipelineState::Idle.start(0), Some(PipelineState::Succeeded));
    }

    #[test]
    fn start_is_rejected_once_running() {
        assert_eq!(PipelineState::RunningStep(1).start(3), None);
        assert_eq!(PipelineState::Succeeded.start(3), None);
    }

    #[test]
    fn success_advances_to_next_step() {
        assert_eq!(
            PipelineState::RunningStep(1).step_finished(true, 3),
            Some(PipelineState::RunningStep(2))
        );
    }

    #[test]
    fn success_on_last_step_succeeds() {
        assert_eq!(
            PipelineState::RunningStep(3).step_finished(true, 3),
            Some(PipelineState::Succeeded)
        );
    }

    #[test]
    fn failure_on_any_step_fails_there() {
        for i in 1..=3 {
            assert_eq!(
                PipelineState::RunningStep(i).step_finished(false, 3),
                Some(PipelineState::Failed(i))
            );
        }
    }

    #[test]
    fn terminal_states_reject_transitions() {
        assert_eq!(PipelineState::Failed(2).step_finished(true, 3), None);
        assert_eq!(PipelineState::Succeeded.step_finished(false, 3), None);
        assert_eq!(PipelineState::Idle.step_finished(true, 3), None);
    }

    #[test]
    fn out_of_range_step_is_rejected() {
        assert_eq!(PipelineState::RunningStep(4).step_finished(true, 3), None);
        assert_eq!(PipelineState::RunningStep(0).step_finished(true, 3), None);
    }

    #[test]
    fn is_terminal() {
        assert!(!PipelineState::Idle.is_terminal());
        assert!(!PipelineState::RunningStep(1).is_terminal());
        assert!(PipelineState::Failed(1).is_terminal());
        assert!(PipelineState::Succeeded.is_terminal());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(PipelineState::Succeeded.exit_code(), 0);
        assert_eq!(PipelineState::Failed(2).exit_code(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(PipelineState::Failed(2).to_string(), "failed at step 2");
    }
}
