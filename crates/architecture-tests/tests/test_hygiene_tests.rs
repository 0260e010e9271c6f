//! Static checks on test code.
//!
//! Invariants:
//! - Temp files come from the `tempfile` crate (RAII cleanup), never from
//!   `std::env::temp_dir()` or hardcoded `/tmp` paths.
//! - Tests that mutate process environment with `temp_env` are `#[serial]`,
//!   since loader construction and overrides read the whole environment.

mod common;

use std::fs;

fn test_sources() -> Vec<(String, String)> {
    common::crate_sources()
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            content
                .contains("#[test]")
                .then(|| (common::relative(&path), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{path}: uses std::env::temp_dir() - prefer tempfile::TempDir"
            ));
        }
        if content.contains("\"/tmp") {
            violations.push(format!("{path}: contains hardcoded /tmp path"));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempdir_bindings_retained() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = tempfile::")
            {
                violations.push(format!(
                    "{path}:{}: temp dir bound to `_` is deleted immediately",
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found temp dirs that are not retained:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_env_mutating_tests_are_serial() {
    let violations: Vec<String> = test_sources()
        .into_iter()
        .filter(|(_, content)| content.contains("temp_env::") && !content.contains("#[serial]"))
        .map(|(path, _)| path)
        .collect();

    assert!(
        violations.is_empty(),
        "Files using temp_env without #[serial]:\n  {}",
        violations.join("\n  ")
    );
}
