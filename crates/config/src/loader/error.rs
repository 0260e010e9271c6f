//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the single error type surfaced by every loader operation.
//! - Absorb source failures (`SourceError`) at the loader boundary.
//! - Classify errors for callers that map them to exit codes.
//!
//! Does NOT handle:
//! - Classifying raw I/O or HTTP failures (see `source/error.rs`).
//!
//! Invariants:
//! - Raw `std::io`/`reqwest` errors never escape except as `#[source]` context.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Malformed-config errors describe the shape problem, never the file contents.

use std::io::ErrorKind;
use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur while constructing a loader or loading configuration.
#[derive(Error, Debug)]
pub enum ConfigLoaderError {
    #[error(
        "No running environment defined: ENVIRONMENT must be 'test' or 'prod'{}",
        .found.as_ref().map(|v| format!(" (got '{v}')")).unwrap_or_default()
    )]
    NoEnvironment { found: Option<String> },

    #[error("No S3 bucket defined. Set S3_BUCKET when ENVIRONMENT is 'prod'.")]
    NoBucket,

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Improperly configured config file {origin}: {reason}")]
    MalformedConfig { origin: String, reason: String },

    #[error("Key not found in configuration: {0}")]
    KeyNotFound(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigLoaderError {
    /// The loader itself is misconfigured (raised at construction).
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            Self::NoEnvironment { .. } | Self::NoBucket | Self::InvalidValue { .. }
        )
    }

    /// The requested file, object, or key does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Source(e) => e.kind() == crate::source::SourceErrorKind::NotFound,
            Self::KeyNotFound(_) => true,
            _ => false,
        }
    }

    /// The source exists (or should) but could not be reached or read.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Source(e) if e.kind() != crate::source::SourceErrorKind::NotFound)
    }

    /// The source was read but is not a usable key/value mapping.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_environment_message() {
        let err = ConfigLoaderError::NoEnvironment { found: None };
        assert!(
            err.to_string()
                .to_lowercase()
                .contains("no running environment defined")
        );

        let err = ConfigLoaderError::NoEnvironment {
            found: Some("staging".to_string()),
        };
        assert!(err.to_string().contains("(got 'staging')"));
    }

    #[test]
    fn test_source_errors_are_transparent() {
        let err: ConfigLoaderError = SourceError::FileNotFound {
            path: PathBuf::from("missing.yaml"),
        }
        .into();
        assert_eq!(err.to_string(), "File missing.yaml does not exist");
        assert!(err.is_not_found());
        assert!(!err.is_unreachable());
    }

    #[test]
    fn test_classification() {
        assert!(ConfigLoaderError::NoBucket.is_misconfiguration());
        assert!(ConfigLoaderError::KeyNotFound("X".to_string()).is_not_found());
        assert!(ConfigLoaderError::from(SourceError::NoCredentials).is_unreachable());
        assert!(
            ConfigLoaderError::MalformedConfig {
                origin: "a".to_string(),
                reason: "b".to_string()
            }
            .is_malformed()
        );
    }
}
