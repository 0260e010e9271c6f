//! Layering of defaults underneath a parsed config.
//!
//! Invariants:
//! - Defaults only fill keys the parsed config lacks; they never replace a value.
//! - The result contains every key from either input.

use crate::RawConfig;

/// Fill keys missing from `config` with values from `defaults`.
pub fn layer_defaults(mut config: RawConfig, defaults: &RawConfig) -> RawConfig {
    for (key, value) in defaults {
        config
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
    config
}
