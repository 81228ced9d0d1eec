//! Step planning for the provisioning sequence

use std::fmt;

/// A single provisioning step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Download the dependency archive to the archive path
    Fetch,
    /// Expand the archive into the dependency directory
    Unpack,
    /// Delete the downloaded archive
    RemoveArchive,
    /// Invoke the external test runner
    RunSuite,
}

impl Step {
    /// Short name used in logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            Step::Fetch => "fetch",
            Step::Unpack => "unpack",
            Step::RemoveArchive => "remove-archive",
            Step::RunSuite => "run-suite",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ordered list of steps a run will execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Steps in execution order
    pub steps: Vec<Step>,
}

/// Compute the steps to execute for the given dependency state
///
/// This is the only branch in the system, kept free of I/O so the
/// sequencing contract can be tested directly: a present dependency goes
/// straight to the runner, an absent one is fetched, unpacked, and cleaned
/// up first.
pub fn plan(dependency_present: bool) -> Plan {
    let steps = if dependency_present {
        vec![Step::RunSuite]
    } else {
        vec![
            Step::Fetch,
            Step::Unpack,
            Step::RemoveArchive,
            Step::RunSuite,
        ]
    };

    Plan { steps }
}
