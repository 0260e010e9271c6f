//! Object storage client for bucketconf.
//!
//! This crate fetches raw object bytes from Amazon S3 or an S3-compatible
//! endpoint. It knows nothing about configuration formats; callers decide
//! what the bytes mean.

pub mod client;
pub mod constants;
pub mod credentials;
pub mod env;
pub mod error;
pub mod signing;

pub use client::{ObjectStore, S3Client, S3ClientConfig};
pub use credentials::{Credentials, CredentialsProvider};
pub use error::{FetchError, Result};
