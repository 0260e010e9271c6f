//! Running environment selection.
//!
//! Responsibilities:
//! - Parse the `ENVIRONMENT` variable into a `RunningEnvironment`.
//!
//! Invariants:
//! - Exactly two values are recognized: `test` and `prod` (case-sensitive,
//!   surrounding whitespace ignored).
//! - Anything else, including unset or blank, is `ConfigLoaderError::NoEnvironment`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ENV_ENVIRONMENT, PROD_ENV, TEST_ENV};
use crate::loader::{ConfigLoaderError, env_var_or_none};

/// Deployment environment that decides where configuration is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunningEnvironment {
    /// Configuration is read from the local filesystem.
    Test,
    /// Configuration is read from the S3 bucket named by `S3_BUCKET`.
    Prod,
}

impl RunningEnvironment {
    /// Read the running environment from the `ENVIRONMENT` variable.
    pub fn from_env() -> Result<Self, ConfigLoaderError> {
        match env_var_or_none(ENV_ENVIRONMENT) {
            Some(value) => value.parse(),
            None => Err(ConfigLoaderError::NoEnvironment { found: None }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunningEnvironment::Test => TEST_ENV,
            RunningEnvironment::Prod => PROD_ENV,
        }
    }
}

impl FromStr for RunningEnvironment {
    type Err = ConfigLoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            TEST_ENV => Ok(RunningEnvironment::Test),
            PROD_ENV => Ok(RunningEnvironment::Prod),
            other => Err(ConfigLoaderError::NoEnvironment {
                found: Some(other.to_string()),
            }),
        }
    }
}

impl fmt::Display for RunningEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_recognized_values() {
        assert_eq!("test".parse::<RunningEnvironment>().unwrap(), RunningEnvironment::Test);
        assert_eq!(" prod ".parse::<RunningEnvironment>().unwrap(), RunningEnvironment::Prod);
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for value in ["", "PROD", "staging", "dev"] {
            let err = value.parse::<RunningEnvironment>().unwrap_err();
            assert!(matches!(err, ConfigLoaderError::NoEnvironment { .. }), "{value}");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_unset_is_no_environment() {
        temp_env::with_var(ENV_ENVIRONMENT, None::<&str>, || {
            let err = RunningEnvironment::from_env().unwrap_err();
            assert!(matches!(err, ConfigLoaderError::NoEnvironment { found: None }));
        });
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variable() {
        temp_env::with_var(ENV_ENVIRONMENT, Some("prod"), || {
            assert_eq!(RunningEnvironment::from_env().unwrap(), RunningEnvironment::Prod);
        });
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(RunningEnvironment::Test.to_string(), "test");
        assert_eq!(RunningEnvironment::Prod.to_string(), "prod");
    }
}
