//! `source`: print the selected environment and reader without loading.

use std::io::Write;

use anyhow::Result;
use bucketconf_config::ConfigLoader;

pub fn run(loader: &ConfigLoader, out: &mut impl Write) -> Result<()> {
    writeln!(out, "environment={}", loader.environment())?;
    writeln!(out, "source={}", loader.source_kind())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucketconf_config::{LocalReader, RawConfig, RunningEnvironment};

    #[test]
    fn test_source_prints_environment_and_kind() {
        let loader = ConfigLoader::with_source(
            RunningEnvironment::Test,
            Box::new(LocalReader::new()),
            RawConfig::new(),
        );
        let mut out = Vec::new();
        run(&loader, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "environment=test\nsource=local\n");
    }
}
