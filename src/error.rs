//! Error types for testprep

use thiserror::Error;

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for provisioning operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error while downloading the archive
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The download URL answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// The archive could not be read as a zip file
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A provisioning step failed
    #[error("Step '{step}' failed: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

impl Error {
    /// Wrap an error with the step it occurred in
    pub fn step_error(step: &'static str, source: Error) -> Self {
        Error::Step {
            step,
            source: Box::new(source),
        }
    }
}
