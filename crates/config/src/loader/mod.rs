//! Configuration loader.
//!
//! Responsibilities:
//! - Select the configuration source from the running environment.
//! - Parse, override, default, and cache configuration (`ConfigLoader`).
//! - Share a single loader per process (`shared_loader`).
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Reading bytes from disk or S3 (see `crate::source`).
//! - Writing configuration back anywhere.
//!
//! Invariants / Assumptions:
//! - Precedence, lowest to highest: defaults < parsed file < environment variables.
//! - `load_dotenv()` must be called explicitly, before the loader is constructed.

mod dotenv;
mod env;
mod error;
mod merge;
mod parse;
mod resolver;
mod shared;

#[cfg(test)]
mod tests;

pub use dotenv::{dotenv_disabled, load_dotenv};
pub use env::{apply_env_overrides, capture_env, env_var_or_none};
pub use error::ConfigLoaderError;
pub use merge::layer_defaults;
pub use parse::parse_raw_config;
pub use resolver::ConfigLoader;
pub use shared::{reset_shared_loader, shared_loader};
