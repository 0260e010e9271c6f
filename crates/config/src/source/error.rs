//! Error types for configuration sources.
//!
//! Responsibilities:
//! - Describe every way a source read can fail, with the location involved.
//! - Classify failures into the three source error kinds callers branch on.
//! - Translate object store failures into source failures.
//!
//! Invariants:
//! - Display strings carry the location but never file contents.
//! - These errors only leave the crate wrapped in `ConfigLoaderError::Source`.

use std::path::PathBuf;
use thiserror::Error;

use bucketconf_store::FetchError;

/// Coarse classification of a source failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Nothing exists at the requested path or key.
    NotFound,
    /// The source exists or should exist but could not be read.
    IoFailure,
    /// The remote source needs credentials and none were found.
    MissingCredentials,
}

/// Errors raised by a `SourceReader`.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("File {} does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error opening {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such file {key}")]
    NoSuchKey { key: String },

    #[error("No S3 credentials")]
    NoCredentials,

    #[error("Could not connect to S3: {message}")]
    Connect { message: String },

    #[error("Error when opening {key}")]
    Buffer {
        key: String,
        #[source]
        source: FetchError,
    },
}

impl SourceError {
    /// The coarse kind of this failure.
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            SourceError::FileNotFound { .. } | SourceError::NoSuchKey { .. } => {
                SourceErrorKind::NotFound
            }
            SourceError::NoCredentials => SourceErrorKind::MissingCredentials,
            SourceError::Open { .. } | SourceError::Connect { .. } | SourceError::Buffer { .. } => {
                SourceErrorKind::IoFailure
            }
        }
    }

    /// Translate a store failure for `key` into a source failure.
    pub fn from_fetch(error: FetchError, key: &str) -> Self {
        match error {
            FetchError::NoSuchKey { .. } => SourceError::NoSuchKey {
                key: key.to_string(),
            },
            FetchError::NoCredentials => SourceError::NoCredentials,
            FetchError::Body(_) => SourceError::Buffer {
                key: key.to_string(),
                source: error,
            },
            other => SourceError::Connect {
                message: other.to_string(),
            },
        }
    }
}
