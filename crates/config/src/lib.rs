//! Configuration loading for bucketconf.
//!
//! This crate reads a YAML configuration from the local filesystem (`test`)
//! or an S3 bucket (`prod`), overrides values from the process environment,
//! fills gaps from caller defaults, and caches the result as an immutable
//! [`Config`].

pub mod constants;
pub mod environment;
mod handle;
mod loader;
pub mod source;

use std::collections::BTreeMap;

/// Flat key/value mapping, used for parsed configs and defaults alike.
pub type RawConfig = BTreeMap<String, String>;

pub use environment::RunningEnvironment;
pub use handle::Config;
pub use loader::{
    ConfigLoader, ConfigLoaderError, apply_env_overrides, capture_env, dotenv_disabled,
    env_var_or_none, layer_defaults, load_dotenv, parse_raw_config, reset_shared_loader,
    shared_loader,
};
pub use source::{LocalReader, RemoteReader, SourceError, SourceErrorKind, SourceReader};
