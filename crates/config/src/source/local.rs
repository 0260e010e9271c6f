//! Local filesystem source.

use std::fs;
use std::path::Path;

use super::{SourceError, SourceReader};

/// Reads configuration files from the local filesystem.
///
/// Relative paths resolve against the process working directory. Only regular
/// files count as present; a directory at `path` is reported as missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalReader;

impl LocalReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for LocalReader {
    fn kind(&self) -> &'static str {
        "local"
    }

    fn read(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        let path = Path::new(location);
        if !path.is_file() {
            return Err(SourceError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        fs::read(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })
    }
}
