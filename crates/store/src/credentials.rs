//! Access credential resolution.
//!
//! Responsibilities:
//! - Resolve AWS access credentials from environment variables.
//! - Fall back to the shared credentials file (`~/.aws/credentials`).
//!
//! Does NOT handle:
//! - Instance metadata, SSO, or assume-role credential sources.
//! - Caching: credentials are resolved per request so rotated keys are picked up.
//!
//! Invariants:
//! - Environment credentials take precedence over the shared file.
//! - Both the access key id and the secret must be present; a half-configured
//!   source is treated as absent.
//! - Secret values are held as `SecretString` and never logged.

use secrecy::{ExposeSecret, SecretString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_PROFILE, ENV_ACCESS_KEY_ID, ENV_PROFILE, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
    ENV_SHARED_CREDENTIALS_FILE,
};
use crate::env::env_var_or_none;

/// A resolved set of access credentials.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into().into()),
            session_token: session_token.map(|t| SecretString::new(t.into())),
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn secret_access_key(&self) -> &str {
        self.secret_access_key.expose_secret()
    }

    pub(crate) fn session_token(&self) -> Option<&str> {
        self.session_token.as_ref().map(|t| t.expose_secret())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Where credentials are looked up, in order.
#[derive(Debug, Clone, Default)]
pub enum CredentialsProvider {
    /// Environment variables, then the shared credentials file.
    #[default]
    Chain,
    /// Fixed credentials, mostly for tests and embedding.
    Static(Credentials),
}

impl CredentialsProvider {
    /// Resolve credentials, returning `None` if no source has a complete set.
    pub fn resolve(&self) -> Option<Credentials> {
        match self {
            CredentialsProvider::Static(credentials) => Some(credentials.clone()),
            CredentialsProvider::Chain => from_env().or_else(from_shared_file),
        }
    }
}

fn from_env() -> Option<Credentials> {
    let access_key_id = env_var_or_none(ENV_ACCESS_KEY_ID)?;
    let secret = env_var_or_none(ENV_SECRET_ACCESS_KEY)?;
    tracing::debug!("Using credentials from environment");
    Some(Credentials::new(
        access_key_id,
        secret,
        env_var_or_none(ENV_SESSION_TOKEN),
    ))
}

fn shared_credentials_path() -> Option<PathBuf> {
    if let Some(path) = env_var_or_none(ENV_SHARED_CREDENTIALS_FILE) {
        return Some(PathBuf::from(path));
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".aws").join("credentials"))
}

fn from_shared_file() -> Option<Credentials> {
    let path = shared_credentials_path()?;
    let profile = env_var_or_none(ENV_PROFILE).unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let credentials = read_profile(&path, &profile)?;
    tracing::debug!(path = %path.display(), profile = %profile, "Using credentials from shared file");
    Some(credentials)
}

/// Read one profile from an INI-style shared credentials file.
///
/// Returns `None` if the file is unreadable, the profile is absent, or the
/// profile lacks either the key id or the secret.
pub fn read_profile(path: &Path, profile: &str) -> Option<Credentials> {
    let content = fs::read_to_string(path).ok()?;
    parse_profile(&content, profile)
}

fn parse_profile(content: &str, profile: &str) -> Option<Credentials> {
    let mut in_profile = false;
    let mut access_key_id = None;
    let mut secret = None;
    let mut token = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_profile = section.trim() == profile;
            continue;
        }
        if !in_profile {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim().to_ascii_lowercase().as_str() {
            "aws_access_key_id" => access_key_id = Some(value),
            "aws_secret_access_key" => secret = Some(value),
            "aws_session_token" => token = Some(value),
            _ => {}
        }
    }

    match (access_key_id, secret) {
        (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
            Some(Credentials::new(id, secret, token.filter(|t| !t.is_empty())))
        }
        _ => None,
    }
}
