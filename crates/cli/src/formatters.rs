//! Output formatters for a resolved configuration.
//!
//! Responsibilities:
//! - Render a `Config` as sorted `KEY=value` lines, JSON, or YAML.
//!
//! Invariants:
//! - JSON and YAML carry both the values and the source they were loaded from.
//! - Output always ends with a newline.

use anyhow::{Context, Result};
use bucketconf_config::Config;

use crate::args::OutputFormat;

pub fn format_config(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(config)),
        OutputFormat::Json => {
            let mut output =
                serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")?;
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize config to YAML")
        }
    }
}

fn format_text(config: &Config) -> String {
    config
        .iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect()
}
