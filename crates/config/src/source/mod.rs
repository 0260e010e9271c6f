//! Configuration source abstractions and implementations.
//!
//! This module provides the byte-level readers the loader dispatches to:
//! - `SourceReader` trait, chosen once when a loader is constructed
//! - `LocalReader`: local filesystem, used in `test`
//! - `RemoteReader`: S3 bucket through an `ObjectStore`, used in `prod`

mod error;
mod local;
mod remote;

pub use error::{SourceError, SourceErrorKind};
pub use local::LocalReader;
pub use remote::RemoteReader;

/// Reads raw configuration bytes from a path or key.
///
/// Implementations must not interpret the bytes; parsing belongs to the loader.
pub trait SourceReader: Send + Sync {
    /// Short name of this source, used in logs (`"local"`, `"s3"`).
    fn kind(&self) -> &'static str;

    /// Read the full contents at `location`.
    fn read(&self, location: &str) -> Result<Vec<u8>, SourceError>;
}
