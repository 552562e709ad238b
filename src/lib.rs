//! Tally - fail-fast launcher for the customer ranking data pipeline.
//!
//! Tally runs the pipeline's external programs one after another, stops at
//! the first one that exits with a non-zero status, and reports the outcome
//! with a localized console line and a process exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Fail-fast orchestration and the pipeline state machine
//! - [`shell`] - External program execution
//! - [`steps`] - Step model, built-in step lists and invokers
//! - [`ui`] - Console output and failure notification
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tally::runner::PipelineRunner;
//! use tally::steps::{builtin_steps, Step, StepResult, Term};
//! use tally::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! let mut invoker = |step: &Step| -> tally::Result<StepResult> {
//!     Ok(StepResult::from_exit_code(step, 0, Duration::ZERO))
//! };
//!
//! let outcome = PipelineRunner::new(builtin_steps(Term::Annual, "python"))
//!     .run(&mut invoker, &mut ui)
//!     .unwrap();
//! assert_eq!(outcome.exit_code(), 0);
//! assert_eq!(outcome.invoked(), vec![1, 2, 3]);
//! ```

pub mod cli;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{PipelineError, Result};
