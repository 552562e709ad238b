//! Steps and their invocation.
//!
//! - [`Step`] - One external program plus its failure message
//! - [`builtin_steps`] - The fixed step lists, selected by [`Term`]
//! - [`StepInvoker`] - Runs a step and reports how it ended
//! - [`ProcessInvoker`] - Runs steps as child processes
//!
//! # Example
//!
//! ```
//! use tally::steps::{builtin_steps, Term, DEFAULT_PYTHON};
//!
//! let steps = builtin_steps(Term::Annual, DEFAULT_PYTHON);
//! assert_eq!(steps.len(), 3);
//! assert_eq!(steps[0].command.to_string(), "python 01_create_data.py");
//! ```

pub mod builtin;
pub mod executor;
pub mod step;

pub use builtin::{builtin_steps, Term, DEFAULT_PYTHON, FAILURE_MESSAGES, SUCCESS_MESSAGE};
pub use executor::{ProcessInvoker, StepInvoker, StepResult, StepStatus};
pub use step::{numbered, Step, StepCommand};
