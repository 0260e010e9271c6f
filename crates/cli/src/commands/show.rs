//! `show`: load a configuration and print every resolved key.

use std::io::Write;

use anyhow::Result;
use bucketconf_config::ConfigLoader;

use crate::args::OutputFormat;
use crate::formatters::format_config;

pub fn run(loader: &ConfigLoader, path: &str, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let config = loader.load(path)?;
    tracing::debug!(keys = config.len(), ?format, "Printing configuration");
    out.write_all(format_config(&config, format)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucketconf_config::{LocalReader, RawConfig, RunningEnvironment};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_prints_layered_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "_BUCKETCONF_SHOW_A: from file\n").unwrap();

        let defaults = RawConfig::from([("_BUCKETCONF_SHOW_B".to_string(), "default".to_string())]);
        let loader =
            ConfigLoader::with_source(RunningEnvironment::Test, Box::new(LocalReader::new()), defaults);

        let mut out = Vec::new();
        run(&loader, &path.to_string_lossy(), OutputFormat::Text, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "_BUCKETCONF_SHOW_A=from file\n_BUCKETCONF_SHOW_B=default\n"
        );
    }
}
