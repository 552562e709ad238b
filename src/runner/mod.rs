//! Pipeline orchestration.

pub mod pipeline;
pub mod state;

pub use pipeline::{PipelineRunner, RunOutcome, RunProgress};
pub use state::PipelineState;
