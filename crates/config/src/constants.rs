//! Centralized constants for the bucketconf configuration loader.
//!
//! Environment variable names and recognized values live here so the loader,
//! the CLI, and tests agree on a single spelling.

// =============================================================================
// Source Selection
// =============================================================================

/// Environment variable selecting the running environment.
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

/// Environment variable naming the S3 bucket used in `prod`.
pub const ENV_S3_BUCKET: &str = "S3_BUCKET";

/// Value of `ENVIRONMENT` selecting the local filesystem source.
pub const TEST_ENV: &str = "test";

/// Value of `ENVIRONMENT` selecting the S3 source.
pub const PROD_ENV: &str = "prod";

// =============================================================================
// Startup
// =============================================================================

/// When set to `1` or `true`, `.env` files are not loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Endpoint override forwarded to the store client; only validated here.
pub const ENV_S3_ENDPOINT: &str = bucketconf_store::constants::ENV_ENDPOINT;
