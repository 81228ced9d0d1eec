//! Command-line entry point
//!
//! With no arguments this reproduces the fixed setup sequence: ensure
//! `./dynamodb` exists (downloading and unpacking DynamoDB Local if not),
//! then run `./spawn-dynamo-run-mocha.sh`. Flags only override the
//! configuration defaults.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use testprep::harness;
use testprep::run::params::{
    DEFAULT_ARCHIVE_PATH, DEFAULT_ARCHIVE_URL, DEFAULT_DEPENDENCY_DIR, DEFAULT_RUNNER,
};

#[derive(Parser)]
#[command(name = "testprep")]
#[command(about = "Provision a local test dependency and run the test suite")]
#[command(version)]
struct Cli {
    /// Directory expected to contain the extracted dependency
    #[arg(long, default_value = DEFAULT_DEPENDENCY_DIR)]
    dir: PathBuf,

    /// URL the dependency archive is downloaded from
    #[arg(long, default_value = DEFAULT_ARCHIVE_URL)]
    archive_url: String,

    /// Local path the downloaded archive is written to
    #[arg(long, default_value = DEFAULT_ARCHIVE_PATH)]
    archive: PathBuf,

    /// Stop at the first failed step instead of continuing
    #[arg(long)]
    halt_on_failure: bool,

    /// Test runner command with its arguments
    #[arg(trailing_var_arg = true, default_value = DEFAULT_RUNNER)]
    runner: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let report = harness::prepare(cli.dir)
        .archive_url(cli.archive_url)
        .archive_path(cli.archive)
        .runner(cli.runner)
        .halt_on_failure(cli.halt_on_failure)
        .execute()?;

    // The runner owns result reporting; surface its exit code as ours.
    if let Some(code) = report.suite_status.and_then(|s| s.code()) {
        process::exit(code);
    }

    Ok(())
}
