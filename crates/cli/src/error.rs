//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigLoaderError` classes to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use bucketconf_config::ConfigLoaderError;

/// Structured exit codes for bucketconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Loader misconfigured - `ENVIRONMENT`, `S3_BUCKET`, or `S3_ENDPOINT` is wrong.
    ///
    /// Scripts should fix the environment and not retry.
    Misconfigured = 2,

    /// Source unreachable - unreadable file, S3 connection or credentials failure.
    ///
    /// Scripts may retry or refresh credentials.
    Unreachable = 3,

    /// Not found - missing file, object, or key.
    NotFound = 4,

    /// Malformed configuration - the file is not a non-empty key/value mapping.
    Malformed = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigLoaderError> for ExitCode {
    fn from(err: &ConfigLoaderError) -> Self {
        if err.is_misconfiguration() {
            ExitCode::Misconfigured
        } else if err.is_not_found() {
            ExitCode::NotFound
        } else if err.is_unreachable() {
            ExitCode::Unreachable
        } else if err.is_malformed() {
            ExitCode::Malformed
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if no `ConfigLoaderError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigLoaderError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
