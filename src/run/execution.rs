//! Step execution and outcome reporting

use std::fs;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};
use crate::plan::{self, Plan, Step};
use crate::run::params::{FailurePolicy, RunParams};
use crate::run::{fetch, unpack};

/// Status of a single executed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// The step ran to completion
    Completed,
    /// The step failed; the message describes the underlying error
    Failed(String),
}

impl StepStatus {
    /// Whether the step completed
    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }

    /// Whether the step failed
    pub fn is_failed(&self) -> bool {
        matches!(self, StepStatus::Failed(_))
    }
}

/// Outcome of one step of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// The step that was executed
    pub step: Step,
    /// How it went
    pub status: StepStatus,
}

/// Record of a full provisioning run
///
/// One outcome per executed step, in execution order, plus the raw exit
/// status of the test runner when it was spawned. The runner's status is
/// recorded verbatim and never judged here; result reporting belongs to
/// the runner itself.
#[derive(Debug, Default)]
pub struct Report {
    /// Per-step outcomes in execution order
    pub outcomes: Vec<StepOutcome>,
    /// Exit status of the test runner, when it was spawned
    pub suite_status: Option<ExitStatus>,
}

impl Report {
    /// Whether every executed step completed
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_completed())
    }

    /// Look up the outcome of a step, if it was executed
    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.step == step)
    }
}

/// Run the full sequence for `params` - main implementation
///
/// The dependency directory's existence is the only input to planning; a
/// missing parent path counts the same as a missing directory.
pub fn run_impl(params: &RunParams) -> Result<Report> {
    let present = params.dependency_dir.is_dir();
    log::info!(
        "dependency {} is {}",
        params.dependency_dir.display(),
        if present { "present, skipping provisioning" } else { "missing, provisioning" }
    );

    let plan = plan::plan(present);
    execute_plan(&plan, params)
}

/// Execute the steps of `plan` in order, strictly sequentially
///
/// Each step blocks until done. Failures are handled per
/// `params.on_failure`: under `Continue` the failure is recorded in the
/// report and execution moves on to the next step; under `Halt` the first
/// failure is returned as an error naming the step.
pub fn execute_plan(plan: &Plan, params: &RunParams) -> Result<Report> {
    let mut report = Report::default();

    for &step in &plan.steps {
        match execute_step(step, params, &mut report) {
            Ok(()) => {
                report.outcomes.push(StepOutcome {
                    step,
                    status: StepStatus::Completed,
                });
            }
            Err(e) => {
                log::warn!("step '{}' failed: {}", step, e);
                report.outcomes.push(StepOutcome {
                    step,
                    status: StepStatus::Failed(e.to_string()),
                });
                if params.on_failure == FailurePolicy::Halt {
                    return Err(Error::step_error(step.label(), e));
                }
            }
        }
    }

    Ok(report)
}

/// Perform the side effect of a single step
fn execute_step(step: Step, params: &RunParams, report: &mut Report) -> Result<()> {
    match step {
        Step::Fetch => {
            let written = fetch::download(&params.archive_url, &params.archive_path)?;
            log::info!(
                "downloaded {} ({} bytes)",
                params.archive_path.display(),
                written
            );
            Ok(())
        }
        Step::Unpack => {
            let entries = unpack::extract(&params.archive_path, &params.dependency_dir)?;
            log::info!(
                "unpacked {} entries into {}",
                entries,
                params.dependency_dir.display()
            );
            Ok(())
        }
        Step::RemoveArchive => {
            // Unconditional: runs whether or not unpacking succeeded.
            fs::remove_file(&params.archive_path)?;
            Ok(())
        }
        Step::RunSuite => {
            let (program, args) = params
                .runner
                .split_first()
                .ok_or_else(|| Error::Generic("empty runner command".to_string()))?;

            // Stdio is inherited: the runner owns all test output.
            let status = Command::new(program).args(args).status()?;
            report.suite_status = Some(status);
            log::info!("test runner exited with {}", status);
            Ok(())
        }
    }
}
