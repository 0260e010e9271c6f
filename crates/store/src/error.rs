//! Error types for the object store client.

use thiserror::Error;

/// Result type alias for object store operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching an object.
///
/// The variants mirror the three outcomes callers need to tell apart:
/// the object is missing, no credentials could be found, or anything else
/// went wrong between us and the service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The bucket exists but holds no object under this key.
    #[error("No such key {key} in bucket {bucket}")]
    NoSuchKey { bucket: String, key: String },

    /// No access credentials were found in the environment or shared credentials file.
    #[error("No credentials available")]
    NoCredentials,

    /// The service answered with a non-success status other than a missing key.
    #[error("S3 error ({status}) {code}: {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response started but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The configured endpoint is not a usable base URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl FetchError {
    /// Check if this error means the object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoSuchKey { .. })
    }

    /// Check if this error means credentials are missing.
    pub fn is_credentials_error(&self) -> bool {
        matches!(self, Self::NoCredentials)
    }
}
