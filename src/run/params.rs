//! Configuration parameters for a provisioning run

use std::path::PathBuf;

/// Download location of the DynamoDB Local distribution
pub const DEFAULT_ARCHIVE_URL: &str =
    "http://dynamodb-local.s3-website-us-west-2.amazonaws.com/dynamodb_local_2016-05-17.zip";

/// Where the downloaded archive is written before extraction
pub const DEFAULT_ARCHIVE_PATH: &str = "./dynamodb.zip";

/// Directory expected to contain the extracted emulator
pub const DEFAULT_DEPENDENCY_DIR: &str = "./dynamodb";

/// Script that starts the emulator and runs the test suite
pub const DEFAULT_RUNNER: &str = "./spawn-dynamo-run-mocha.sh";

/// What to do when a provisioning step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and keep going with the remaining steps
    ///
    /// This matches the historical behavior of the setup script, where
    /// every invocation was fire-and-forget.
    #[default]
    Continue,
    /// Stop at the first failed step
    Halt,
}

/// Configuration for a provisioning run
///
/// The defaults reproduce the fixed values of the original setup script;
/// every field can be overridden so the orchestration itself stays free of
/// hardcoded paths.
#[derive(Debug, Clone)]
pub struct RunParams {
    /// Directory whose existence decides whether provisioning is needed
    pub dependency_dir: PathBuf,
    /// URL the dependency archive is downloaded from
    pub archive_url: String,
    /// Local path the archive is written to and removed from
    pub archive_path: PathBuf,
    /// Test runner command: program followed by its arguments
    pub runner: Vec<String>,
    /// Failure handling policy for the step sequence
    pub on_failure: FailurePolicy,
}

impl RunParams {
    /// Create parameters for the given dependency directory with default
    /// archive URL, archive path, and runner
    pub fn new(dependency_dir: impl Into<PathBuf>) -> Self {
        RunParams {
            dependency_dir: dependency_dir.into(),
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            runner: vec![DEFAULT_RUNNER.to_string()],
            on_failure: FailurePolicy::default(),
        }
    }

    /// Set the archive download URL
    pub fn archive_url(mut self, url: impl Into<String>) -> Self {
        self.archive_url = url.into();
        self
    }

    /// Set the local archive path
    pub fn archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = path.into();
        self
    }

    /// Set the runner command (program followed by its arguments)
    pub fn runner<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runner = argv.into_iter().map(Into::into).collect();
        self
    }

    /// Set the failure handling policy
    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}

impl Default for RunParams {
    fn default() -> Self {
        Self::new(DEFAULT_DEPENDENCY_DIR)
    }
}
