//! Immutable view over a resolved configuration.
//!
//! Responsibilities:
//! - Expose read-only lookups over the resolved key/value map.
//! - Remember the path or key the configuration was loaded from.
//!
//! Does NOT handle:
//! - Loading, overriding, or defaulting (see `loader`).
//!
//! Invariants:
//! - A `Config` is never mutated after construction; changes flow through a
//!   fresh `load` after `reset`.

use serde::Serialize;
use std::collections::btree_map;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::RawConfig;
use crate::loader::ConfigLoaderError;

/// Resolved configuration plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    source: String,
    #[serde(rename = "config")]
    values: RawConfig,
}

impl Config {
    pub fn new(values: RawConfig, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            values,
        }
    }

    /// Look up a key, failing with `KeyNotFound` if it is absent.
    pub fn get(&self, key: &str) -> Result<&str, ConfigLoaderError> {
        self.get_opt(key)
            .ok_or_else(|| ConfigLoaderError::KeyNotFound(key.to_string()))
    }

    /// Look up a key, returning `default` if it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_opt(key).unwrap_or(default)
    }

    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a key and parse it into `T`.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound` if the key is absent.
    /// - `InvalidValue` if the value does not parse as `T`.
    pub fn parse<T>(&self, key: &str) -> Result<T, ConfigLoaderError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get(key)?
            .parse()
            .map_err(|e: T::Err| ConfigLoaderError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The path or key this configuration was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.values.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.values.keys()
    }

    pub fn as_map(&self) -> &RawConfig {
        &self.values
    }
}

/// Mapping-style lookup.
///
/// # Panics
///
/// Panics if the key is absent, like indexing a `HashMap`. Use [`Config::get`]
/// for a fallible lookup.
impl Index<&str> for Config {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        match self.get_opt(key) {
            Some(value) => value,
            None => panic!("{}", ConfigLoaderError::KeyNotFound(key.to_string())),
        }
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config(config={:?} source={:?})", self.values, self.source)
    }
}
