//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test loading, overriding, defaulting, caching, and reset.
//! - Test environment-driven source selection and construction errors.
//! - Test the process-wide shared loader lifecycle.
//! - Test dotenv loading behavior.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Variables that influence loader construction, cleared by default in tests.
pub const LOADER_VARS: [&str; 4] = ["ENVIRONMENT", "S3_BUCKET", "S3_ENDPOINT", "DOTENV_DISABLED"];
