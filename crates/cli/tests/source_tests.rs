//! Integration tests for `bucketconf source`.

mod common;

use common::bucketconf_cmd;
use tempfile::TempDir;

#[test]
fn test_source_test_environment() {
    bucketconf_cmd()
        .arg("source")
        .assert()
        .success()
        .stdout("environment=test\nsource=local\n");
}

#[test]
fn test_source_prod_environment() {
    let dir = TempDir::new().unwrap();

    bucketconf_cmd()
        .env("ENVIRONMENT", "prod")
        .env("S3_BUCKET", "configs")
        .env("AWS_SHARED_CREDENTIALS_FILE", dir.path().join("credentials"))
        .arg("source")
        .assert()
        .success()
        .stdout("environment=prod\nsource=s3\n");
}
