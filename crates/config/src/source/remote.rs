//! S3 bucket source.

use bucketconf_store::ObjectStore;

use super::{SourceError, SourceReader};

/// Reads configuration objects from a single bucket.
pub struct RemoteReader {
    bucket: String,
    store: Box<dyn ObjectStore>,
}

impl RemoteReader {
    pub fn new(bucket: impl Into<String>, store: Box<dyn ObjectStore>) -> Self {
        Self {
            bucket: bucket.into(),
            store,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl std::fmt::Debug for RemoteReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteReader")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl SourceReader for RemoteReader {
    fn kind(&self) -> &'static str {
        "s3"
    }

    fn read(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        self.store
            .get_object(&self.bucket, location)
            .map_err(|e| SourceError::from_fetch(e, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceErrorKind;
    use bucketconf_store::FetchError;

    /// Store double that answers every request with a fixed outcome.
    struct FixedStore(fn(&str, &str) -> bucketconf_store::Result<Vec<u8>>);

    impl ObjectStore for FixedStore {
        fn get_object(&self, bucket: &str, key: &str) -> bucketconf_store::Result<Vec<u8>> {
            (self.0)(bucket, key)
        }
    }

    #[test]
    fn test_reads_from_configured_bucket() {
        let reader = RemoteReader::new(
            "app-config",
            Box::new(FixedStore(|bucket, key| {
                Ok(format!("BUCKET: {}\nKEY: {}\n", bucket, key).into_bytes())
            })),
        );

        let bytes = reader.read("prod/app.yaml").unwrap();
        assert_eq!(bytes, b"BUCKET: app-config\nKEY: prod/app.yaml\n");
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let reader = RemoteReader::new(
            "app-config",
            Box::new(FixedStore(|bucket, key| {
                Err(FetchError::NoSuchKey {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                })
            })),
        );

        let err = reader.read("prod/app.yaml").unwrap_err();
        assert_eq!(err.kind(), SourceErrorKind::NotFound);
        assert_eq!(err.to_string(), "No such file prod/app.yaml");
    }

    #[test]
    fn test_missing_credentials() {
        let reader = RemoteReader::new(
            "app-config",
            Box::new(FixedStore(|_, _| Err(FetchError::NoCredentials))),
        );

        let err = reader.read("prod/app.yaml").unwrap_err();
        assert_eq!(err.kind(), SourceErrorKind::MissingCredentials);
    }

    #[test]
    fn test_other_store_errors_are_io_failures() {
        let reader = RemoteReader::new(
            "app-config",
            Box::new(FixedStore(|_, _| {
                Err(FetchError::InvalidEndpoint("bad".to_string()))
            })),
        );

        let err = reader.read("prod/app.yaml").unwrap_err();
        assert_eq!(err.kind(), SourceErrorKind::IoFailure);
        assert!(err.to_string().contains("Could not connect to S3"));
    }
}
