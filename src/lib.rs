//! # testprep
//!
//! Provision a local test dependency, then hand off to an external test
//! runner.
//!
//! The crate models the classic pre-test shuffle around a local database
//! emulator: if the dependency directory is already on disk the runner is
//! invoked directly; otherwise the distribution archive is downloaded,
//! unpacked into place, the archive is deleted, and the runner is invoked.
//! Planning is a pure function of the dependency's presence, so the
//! branching and sequencing contract is testable without touching the
//! network or spawning processes.

pub mod error;
pub mod plan;
pub mod run;

pub use error::{Error, Result};
pub use plan::{plan, Plan, Step};
pub use run::{execute_plan, FailurePolicy, Report, RunParams, StepOutcome, StepStatus};

/// Builder for configuring and executing a provisioning run
///
/// This provides a fluent interface over [`RunParams`].
///
/// # Examples
///
/// ```no_run
/// use testprep::harness;
///
/// // Defaults: DynamoDB Local into ./dynamodb, then ./spawn-dynamo-run-mocha.sh
/// harness::prepare("./dynamodb").execute().unwrap();
///
/// // With customization
/// harness::prepare("./deps/emulator")
///     .archive_url("http://example.com/emulator.zip")
///     .archive_path("./deps/emulator.zip")
///     .runner(["./scripts/run-tests.sh", "--grep", "integration"])
///     .halt_on_failure(true)
///     .execute()
///     .unwrap();
/// ```
pub struct Builder {
    params: RunParams,
}

impl Builder {
    /// Create a new builder for the given dependency directory
    fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            params: RunParams::new(dir),
        }
    }

    /// Set the URL the dependency archive is downloaded from
    pub fn archive_url(mut self, url: impl Into<String>) -> Self {
        self.params = self.params.archive_url(url);
        self
    }

    /// Set the local path the downloaded archive is written to
    pub fn archive_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.params = self.params.archive_path(path);
        self
    }

    /// Set the test runner command (program followed by its arguments)
    pub fn runner<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = self.params.runner(argv);
        self
    }

    /// Stop at the first failed step instead of continuing
    ///
    /// The default keeps going, matching the historical fire-and-forget
    /// behavior of the setup script.
    pub fn halt_on_failure(mut self, halt: bool) -> Self {
        let policy = if halt {
            FailurePolicy::Halt
        } else {
            FailurePolicy::Continue
        };
        self.params = self.params.on_failure(policy);
        self
    }

    /// Execute the provisioning sequence
    ///
    /// Checks the dependency directory, runs the planned steps in order,
    /// and returns the per-step [`Report`].
    pub fn execute(self) -> Result<Report> {
        run::run(&self.params)
    }
}

/// Create a new provisioning builder for a dependency directory
///
/// This is the main entry point for preparing a dependency and running
/// the suite.
///
/// # Examples
///
/// ```no_run
/// use testprep::harness;
///
/// harness::prepare("./dynamodb").execute().unwrap();
/// ```
pub mod harness {
    use super::*;

    /// Create a new builder for the given dependency directory
    pub fn prepare(dir: impl Into<std::path::PathBuf>) -> Builder {
        Builder::new(dir)
    }
}
