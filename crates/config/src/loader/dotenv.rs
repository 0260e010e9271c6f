//! `.env` file loading.
//!
//! Responsibilities:
//! - Populate the process environment from a `.env` file in the working directory
//!   (or its parents) before a loader is constructed.
//! - Honor the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Missing `.env` files are silently ignored.
//! - Variables already set in the process environment are not overwritten.
//! - Errors never include raw .env line contents.

use std::path::PathBuf;

use super::error::ConfigLoaderError;
use crate::constants::ENV_DOTENV_DISABLED;

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file if present.
///
/// Returns the path of the file that was loaded, or `None` if loading was
/// disabled or no file was found.
///
/// # Errors
///
/// - `DotenvParse` if the file exists but has invalid syntax.
/// - `DotenvIo` if the file exists but cannot be read.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigLoaderError> {
    if dotenv_disabled() {
        return Ok(None);
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(Some(path))
        }
        Err(e) if is_not_found(&e) => Ok(None),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigLoaderError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigLoaderError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigLoaderError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
