//! Blocking S3 `GetObject` client.
//!
//! Responsibilities:
//! - Build object URLs (virtual-hosted for AWS, path-style for custom endpoints).
//! - Sign and send `GET` requests, returning the object body.
//! - Classify failures into `FetchError` variants.
//!
//! Does NOT handle:
//! - Retries. Every failure is returned to the caller as-is.
//! - Writing, listing, or multipart downloads.
//!
//! Invariants:
//! - Credentials are resolved before any network traffic; missing credentials
//!   never cause a request to be sent.
//! - A 404 is `NoSuchKey` only when the error code says so or the body carries
//!   no code at all; `NoSuchBucket` and friends are service errors.

use chrono::Utc;
use percent_encoding::utf8_percent_encode;
use std::time::Duration;
use url::Url;

use crate::constants::{DEFAULT_REGION, DEFAULT_TIMEOUT_SECS, ENV_DEFAULT_REGION, ENV_ENDPOINT, ENV_REGION};
use crate::credentials::CredentialsProvider;
use crate::env::env_var_or_none;
use crate::error::{FetchError, Result};
use crate::signing::{S3_PATH_ENCODE_SET, sign_get};

/// Fetches raw object bytes by bucket and key.
///
/// Implementations:
/// - `S3Client`: Amazon S3 or any S3-compatible endpoint over HTTP
/// - Test doubles returning canned bytes or errors
pub trait ObjectStore: Send + Sync {
    /// Fetch the full contents of `key` in `bucket`.
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// Connection settings for `S3Client`.
#[derive(Debug, Clone)]
pub struct S3ClientConfig {
    region: String,
    endpoint: Option<Url>,
    timeout: Duration,
}

impl S3ClientConfig {
    /// Create a config for AWS S3 in `region`.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read region and endpoint from the environment.
    ///
    /// Region comes from `AWS_REGION`, then `AWS_DEFAULT_REGION`, else `us-east-1`.
    /// `S3_ENDPOINT`, when set, switches to path-style addressing against that endpoint.
    pub fn from_env() -> Result<Self> {
        let region = env_var_or_none(ENV_REGION)
            .or_else(|| env_var_or_none(ENV_DEFAULT_REGION))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let config = Self::new(region);
        match env_var_or_none(ENV_ENDPOINT) {
            Some(endpoint) => config.with_endpoint(&endpoint),
            None => Ok(config),
        }
    }

    /// Use a custom S3-compatible endpoint (path-style addressing).
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|e| FetchError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(FetchError::InvalidEndpoint(format!(
                "{}: must be an absolute http(s) URL with a host",
                endpoint
            )));
        }
        self.endpoint = Some(url);
        Ok(self)
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// S3 client issuing signed, blocking `GET` requests.
#[derive(Debug)]
pub struct S3Client {
    http: reqwest::blocking::Client,
    config: S3ClientConfig,
    credentials: CredentialsProvider,
}

impl S3Client {
    /// Create a client using the default credentials chain.
    pub fn new(config: S3ClientConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            credentials: CredentialsProvider::default(),
        })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(S3ClientConfig::from_env()?)
    }

    /// Replace the credentials provider.
    pub fn with_credentials(mut self, credentials: CredentialsProvider) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn config(&self) -> &S3ClientConfig {
        &self.config
    }

    /// Build the request URL for an object.
    pub fn object_url(&self, bucket: &str, key: &str) -> Result<Url> {
        let encoded_key = utf8_percent_encode(key.trim_start_matches('/'), S3_PATH_ENCODE_SET);

        match &self.config.endpoint {
            Some(endpoint) => {
                let mut url = endpoint.clone();
                let base = endpoint.path().trim_end_matches('/');
                url.set_path(&format!("{}/{}/{}", base, bucket, encoded_key));
                Ok(url)
            }
            None => {
                let raw = format!(
                    "https://{}.s3.{}.amazonaws.com/{}",
                    bucket, self.config.region, encoded_key
                );
                Url::parse(&raw).map_err(|e| FetchError::InvalidEndpoint(format!("{}: {}", raw, e)))
            }
        }
    }
}

impl ObjectStore for S3Client {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let credentials = self.credentials.resolve().ok_or(FetchError::NoCredentials)?;
        let url = self.object_url(bucket, key)?;

        let mut request = self.http.get(url.clone());
        for (name, value) in sign_get(&url, &self.config.region, &credentials, Utc::now()) {
            request = request.header(name, value);
        }

        tracing::debug!(bucket = %bucket, key = %key, url = %url, "Fetching object");
        let response = request.send()?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().map_err(FetchError::Body)?;
            tracing::debug!(bucket = %bucket, key = %key, bytes = body.len(), "Fetched object");
            return Ok(body.to_vec());
        }

        let body = response.text().unwrap_or_default();
        let err = classify_error(status.as_u16(), &body, bucket, key);
        tracing::debug!(bucket = %bucket, key = %key, error = %err, "Object fetch failed");
        Err(err)
    }
}

/// Extract the text of the first `<tag>...</tag>` element.
fn xml_element<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = body.find(&open)? + open.len();
    let end = body[start..].find(&close)? + start;
    Some(body[start..end].trim())
}

/// Map a non-success response to a `FetchError`.
pub(crate) fn classify_error(status: u16, body: &str, bucket: &str, key: &str) -> FetchError {
    let code = xml_element(body, "Code");
    let is_missing_key = match code {
        Some(code) => code == "NoSuchKey",
        None => status == 404,
    };

    if is_missing_key {
        return FetchError::NoSuchKey {
            bucket: bucket.to_string(),
            key: key.to_string(),
        };
    }

    FetchError::Service {
        status,
        code: code.unwrap_or("Unknown").to_string(),
        message: xml_element(body, "Message").unwrap_or_default().to_string(),
    }
}
