//! `get`: load a configuration and print a single value.

use std::io::Write;

use anyhow::Result;
use bucketconf_config::ConfigLoader;

pub fn run(
    loader: &ConfigLoader,
    path: &str,
    key: &str,
    fallback: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let config = loader.load(path)?;
    let value = match fallback {
        Some(fallback) => config.get_or(key, fallback),
        None => config.get(key)?,
    };
    writeln!(out, "{value}")?;
    Ok(())
}
