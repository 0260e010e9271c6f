//! Integration tests for `bucketconf get`.

mod common;

use common::{bucketconf_cmd, write_fixture};
use predicates::prelude::*;

const YAML: &str = "_BUCKETCONF_CLI_NAME: fizz\n_BUCKETCONF_CLI_PORT: 8080\n";

#[test]
fn test_get_prints_value() {
    let (_dir, path) = write_fixture("config.yaml", YAML);

    bucketconf_cmd()
        .arg("get")
        .arg(&path)
        .arg("_BUCKETCONF_CLI_PORT")
        .assert()
        .success()
        .stdout("8080\n");
}

#[test]
fn test_get_env_override() {
    let (_dir, path) = write_fixture("config.yaml", YAML);

    bucketconf_cmd()
        .env("_BUCKETCONF_CLI_NAME", "buzz")
        .arg("get")
        .arg(&path)
        .arg("_BUCKETCONF_CLI_NAME")
        .assert()
        .success()
        .stdout("buzz\n");
}

#[test]
fn test_get_default_only_key() {
    let (_dir, path) = write_fixture("config.yaml", YAML);

    bucketconf_cmd()
        .args(["-d", "_BUCKETCONF_CLI_MISSING=from default", "get"])
        .arg(&path)
        .arg("_BUCKETCONF_CLI_MISSING")
        .assert()
        .success()
        .stdout("from default\n");
}

#[test]
fn test_get_missing_key_uses_fallback() {
    let (_dir, path) = write_fixture("config.yaml", YAML);

    bucketconf_cmd()
        .arg("get")
        .arg(&path)
        .arg("_BUCKETCONF_CLI_MISSING")
        .args(["--fallback", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");
}

#[test]
fn test_get_missing_key_exits_4() {
    let (_dir, path) = write_fixture("config.yaml", YAML);

    bucketconf_cmd()
        .arg("get")
        .arg(&path)
        .arg("_BUCKETCONF_CLI_MISSING")
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: Key not found in configuration: _BUCKETCONF_CLI_MISSING",
        ));
}
