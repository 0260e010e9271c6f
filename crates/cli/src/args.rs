//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `--default KEY=VALUE` pairs into loader defaults.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use bucketconf_config::RawConfig;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bucketconf")]
#[command(
    about = "Load a YAML configuration from a local file (ENVIRONMENT=test) or S3 (ENVIRONMENT=prod)",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ENVIRONMENT=test bucketconf show ./config.yaml\n  ENVIRONMENT=prod S3_BUCKET=my-configs bucketconf get app/config.yaml DATABASE_URL\n  bucketconf --default LOG_LEVEL=info show ./config.yaml --format json\n"
)]
pub struct Cli {
    /// Default value used when a key is absent from the file (repeatable)
    #[arg(
        short = 'd',
        long = "default",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_key_val
    )]
    pub defaults: Vec<(String, String)>,

    /// Log output format (logs always go to stderr; filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Defaults collected from `--default`, or `None` when none were given.
    ///
    /// Later occurrences of the same key win.
    pub fn defaults(&self) -> Option<RawConfig> {
        if self.defaults.is_empty() {
            return None;
        }
        Some(self.defaults.iter().cloned().collect())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a configuration and print every resolved key
    Show {
        /// Local file path (test) or object key (prod)
        path: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Load a configuration and print a single value
    Get {
        /// Local file path (test) or object key (prod)
        path: String,

        /// Key to look up
        key: String,

        /// Value to print when the key is absent
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Print the selected environment and source without loading anything
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sorted KEY=value lines
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Parse a `KEY=VALUE` pair. The value may be empty or contain `=`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
