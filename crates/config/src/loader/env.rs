//! Environment variable access for configuration.
//!
//! Responsibilities:
//! - Read loader settings (`ENVIRONMENT`, `S3_BUCKET`, ...) with empty/whitespace filtering.
//! - Snapshot the process environment for the override rule.
//! - Apply environment overrides to a parsed config.
//!
//! Does NOT handle:
//! - Filling in defaults (see merge.rs).
//! - .env file loading (see dotenv.rs).
//!
//! Invariants:
//! - Loader settings treat empty or whitespace-only variables as unset and are trimmed.
//! - The override rule is exact: a variable that exists overrides, even if empty,
//!   and its value is used untrimmed.
//! - Only keys already present in the parsed config are overridden; the
//!   environment never adds keys.

use std::collections::HashMap;

use crate::RawConfig;

pub use bucketconf_store::env::env_var_or_none;

/// Copy every UTF-8 variable currently set in the process environment.
///
/// Entries whose name or value is not valid UTF-8 are skipped; they can never
/// match a config key anyway.
pub fn capture_env() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                tracing::warn!(variable = %key, "Skipping environment variable with non UTF-8 value");
                None
            }
            _ => None,
        })
        .collect()
}

/// Replace the value of every key in `config` that has a same-named entry in `env`.
///
/// Returns the names of the overridden keys.
pub fn apply_env_overrides(config: &mut RawConfig, env: &HashMap<String, String>) -> Vec<String> {
    let mut overridden = Vec::new();
    for (key, value) in config.iter_mut() {
        if let Some(env_value) = env.get(key) {
            value.clone_from(env_value);
            overridden.push(key.clone());
        }
    }
    overridden
}
