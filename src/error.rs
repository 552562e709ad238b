//! Error types for pipeline runs.
//!
//! This module defines [`PipelineError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing step is always [`PipelineError::StepFailed`], whatever the cause
//!   (non-zero exit, killed by a signal, program missing)
//! - Use `anyhow::Error` (via `PipelineError::Other`) for unexpected errors
//! - Nothing is recovered locally; the runner turns errors into exit codes

use thiserror::Error;

/// Core error type for pipeline runs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An external step did not exit with status 0.
    #[error("Step {index} failed with exit code {code:?}: {command}")]
    StepFailed {
        index: usize,
        command: String,
        code: Option<i32>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PipelineError {
    /// Position of the failed step, if this error is a step failure.
    pub fn failed_step(&self) -> Option<usize> {
        match self {
            Self::StepFailed { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
