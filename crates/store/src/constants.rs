//! Centralized constants for the object store client.
//!
//! Environment variable names follow the AWS CLI/SDK conventions so the same
//! shell setup works for both.

/// Default signing region when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default profile name in the shared credentials file.
pub const DEFAULT_PROFILE: &str = "default";

pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const ENV_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";
pub const ENV_PROFILE: &str = "AWS_PROFILE";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Custom S3-compatible endpoint. When set, requests use path-style addressing.
pub const ENV_ENDPOINT: &str = "S3_ENDPOINT";

/// Payload hash sent for GET requests; the body is never signed.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";
