//! Shared test utilities for bucketconf integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write YAML fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `ENVIRONMENT` is set to "test" unless overridden.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `bucketconf` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ENVIRONMENT=test` so commands read local files.
/// - S3 and AWS variables are cleared to ensure no leakage from the host.
pub fn bucketconf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bucketconf");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("ENVIRONMENT", "test");

    cmd.env_remove("S3_BUCKET")
        .env_remove("S3_ENDPOINT")
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("AWS_PROFILE")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `name` inside a new temp dir and return both.
#[allow(dead_code)]
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// The reference fixture: file values, one of which is overridden via env.
#[allow(dead_code)]
pub const SCENARIO_YAML: &str = "VAR0: fizz\nVAR2: foo\nVAR3: bar\n";
