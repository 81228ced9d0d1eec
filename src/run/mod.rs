//! Provisioning execution module

pub mod execution;
pub mod fetch;
pub mod params;
pub mod unpack;

// Re-export public types
pub use execution::{execute_plan, Report, StepOutcome, StepStatus};
pub use params::{FailurePolicy, RunParams};

use crate::error::Result;

/// Run the full provisioning sequence with the default parameters
pub fn run_with_defaults() -> Result<Report> {
    run(&RunParams::default())
}

/// Run the full provisioning sequence for the given parameters
pub fn run(params: &RunParams) -> Result<Report> {
    execution::run_impl(params)
}
