//! Configuration resolver.
//!
//! Responsibilities:
//! - Select and validate the source reader from the running environment.
//! - Load, parse, override, and default a configuration, then cache the result.
//! - Reset the cache so the next load re-reads the source.
//!
//! Does NOT handle:
//! - Process-wide sharing of a single loader (see shared.rs).
//! - Byte-level reading (see `crate::source`).
//!
//! Invariants / Assumptions:
//! - Precedence, lowest to highest: defaults < parsed file < environment variables.
//! - The cache is not keyed by path: once loaded, every `load` returns the same handle.
//! - The cache lock is held across the whole miss path, so concurrent first
//!   loads read the source once.
//! - A failed load leaves the cache empty; no partial handle is ever stored.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bucketconf_store::S3Client;

use super::env::{apply_env_overrides, capture_env, env_var_or_none};
use super::error::ConfigLoaderError;
use super::merge::layer_defaults;
use super::parse::parse_raw_config;
use crate::RawConfig;
use crate::constants::{ENV_S3_BUCKET, ENV_S3_ENDPOINT};
use crate::environment::RunningEnvironment;
use crate::handle::Config;
use crate::source::{LocalReader, RemoteReader, SourceError, SourceReader};

/// Loads configuration from the environment-selected source and caches it.
pub struct ConfigLoader {
    environment: RunningEnvironment,
    source: Box<dyn SourceReader>,
    defaults: RawConfig,
    cached: Mutex<Option<Arc<Config>>>,
}

impl ConfigLoader {
    /// Create a loader whose source is selected by `ENVIRONMENT`.
    ///
    /// # Errors
    ///
    /// - `NoEnvironment` if `ENVIRONMENT` is unset or not `test`/`prod`.
    /// - `NoBucket` if `ENVIRONMENT=prod` and `S3_BUCKET` is unset.
    /// - `InvalidValue` if `S3_ENDPOINT` is set but unusable.
    /// - `Source` if the HTTP client cannot be created.
    pub fn from_env(defaults: Option<RawConfig>) -> Result<Self, ConfigLoaderError> {
        let environment = RunningEnvironment::from_env()?;
        tracing::info!(environment = %environment, "Current environment selected");

        let source: Box<dyn SourceReader> = match environment {
            RunningEnvironment::Test => Box::new(LocalReader::new()),
            RunningEnvironment::Prod => {
                let bucket = env_var_or_none(ENV_S3_BUCKET).ok_or(ConfigLoaderError::NoBucket)?;
                let client = S3Client::from_env().map_err(|e| match e {
                    bucketconf_store::FetchError::InvalidEndpoint(message) => {
                        ConfigLoaderError::InvalidValue {
                            key: ENV_S3_ENDPOINT.to_string(),
                            message,
                        }
                    }
                    other => SourceError::from_fetch(other, "").into(),
                })?;
                Box::new(RemoteReader::new(bucket, Box::new(client)))
            }
        };

        Ok(Self::with_source(environment, source, defaults.unwrap_or_default()))
    }

    /// Create a loader with an explicitly chosen source.
    pub fn with_source(
        environment: RunningEnvironment,
        source: Box<dyn SourceReader>,
        defaults: RawConfig,
    ) -> Self {
        Self {
            environment,
            source,
            defaults,
            cached: Mutex::new(None),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Option<Arc<Config>>> {
        // The guarded value is only ever replaced whole, so a poisoned lock is still consistent.
        self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the configuration at `path`, or return the cached handle.
    ///
    /// When a handle is cached, `path` is ignored.
    pub fn load(&self, path: &str) -> Result<Arc<Config>, ConfigLoaderError> {
        let mut cached = self.cache();
        if let Some(config) = cached.as_ref() {
            tracing::debug!(source = %config.source(), "Returning cached configuration");
            return Ok(Arc::clone(config));
        }

        let bytes = self.source.read(path)?;
        let mut raw = parse_raw_config(&bytes, path)?;

        let overridden = apply_env_overrides(&mut raw, &capture_env());
        if !overridden.is_empty() {
            tracing::debug!(keys = ?overridden, "Applied environment overrides");
        }

        let resolved = layer_defaults(raw, &self.defaults);
        let config = Arc::new(Config::new(resolved, path));
        tracing::info!(
            source = %path,
            reader = self.source.kind(),
            keys = config.len(),
            "Configuration loaded"
        );

        *cached = Some(Arc::clone(&config));
        Ok(config)
    }

    /// Drop the cached configuration. Source and defaults are kept.
    pub fn reset(&self) {
        if self.cache().take().is_some() {
            tracing::debug!("Configuration cache cleared");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cache().is_some()
    }

    pub fn environment(&self) -> RunningEnvironment {
        self.environment
    }

    /// Short name of the selected source reader.
    pub fn source_kind(&self) -> &'static str {
        self.source.kind()
    }

    pub fn defaults(&self) -> &RawConfig {
        &self.defaults
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("environment", &self.environment)
            .field("source", &self.source.kind())
            .field("defaults", &self.defaults.keys().collect::<Vec<_>>())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
