//! AWS Signature Version 4 request signing for `GET` object requests.
//!
//! Responsibilities:
//! - Build the canonical request, string to sign, and signing key.
//! - Produce the headers (`Authorization`, `x-amz-date`, ...) to attach to a request.
//!
//! Does NOT handle:
//! - Query-string (presigned URL) signing.
//! - Signing request bodies: the payload hash is always `UNSIGNED-PAYLOAD`.
//!
//! Invariants:
//! - The URL path passed in is already percent-encoded with `S3_PATH_ENCODE_SET`
//!   and is used verbatim as the canonical URI.
//! - Canonical headers are emitted in lexicographic order.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use sha2::{Digest, Sha256};
use url::Url;

use crate::constants::UNSIGNED_PAYLOAD;
use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";

/// Characters left unescaped in an object key path: RFC 3986 unreserved plus `/`.
pub const S3_PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

fn hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Derive the SigV4 signing key for a date (`YYYYMMDD`), region and service.
pub fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac(format!("AWS4{}", secret).as_bytes(), date.as_bytes());
    let k_region = hmac(&k_date, region.as_bytes());
    let k_service = hmac(&k_region, service.as_bytes());
    hmac(&k_service, b"aws4_request")
}

/// `Host` header value as the HTTP client will send it.
fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Sign a `GET` request for `url` and return the headers to attach.
pub fn sign_get(
    url: &Url,
    region: &str,
    credentials: &Credentials,
    now: DateTime<Utc>,
) -> Vec<(&'static str, String)> {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();

    let mut canonical: Vec<(&'static str, String)> = vec![
        ("host", host_header(url)),
        ("x-amz-content-sha256", UNSIGNED_PAYLOAD.to_string()),
        ("x-amz-date", amz_date.clone()),
    ];
    if let Some(token) = credentials.session_token() {
        canonical.push(("x-amz-security-token", token.to_string()));
    }

    let canonical_headers: String = canonical
        .iter()
        .map(|(name, value)| format!("{}:{}\n", name, value.trim()))
        .collect();
    let signed_headers = canonical
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(";");

    let canonical_request = format!(
        "GET\n{}\n{}\n{}\n{}\n{}",
        url.path(),
        url.query().unwrap_or_default(),
        canonical_headers,
        signed_headers,
        UNSIGNED_PAYLOAD
    );

    let scope = format!("{}/{}/{}/aws4_request", date, region, SERVICE);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let key = signing_key(credentials.secret_access_key(), &date, region, SERVICE);
    let signature = hex::encode(hmac(&key, string_to_sign.as_bytes()));

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM,
        credentials.access_key_id(),
        scope,
        signed_headers,
        signature
    );

    // `host` is set by the HTTP client from the URL.
    let mut headers: Vec<(&'static str, String)> = canonical
        .into_iter()
        .filter(|(name, _)| *name != "host")
        .collect();
    headers.push(("authorization", authorization));
    headers
}
