//! Architecture tests for module documentation.
//!
//! Every non-test source file must open with a `//!` module doc, so each
//! module states what it is responsible for.

mod common;

use std::fs;

#[test]
fn every_source_module_has_a_doc_header() {
    let missing: Vec<String> = common::crate_sources()
        .into_iter()
        .filter(|path| !common::is_test_path(path))
        .filter(|path| {
            let content = fs::read_to_string(path).unwrap_or_default();
            !content.trim_start().starts_with("//!")
        })
        .map(|path| common::relative(&path))
        .collect();

    assert!(
        missing.is_empty(),
        "Source files without a `//!` module doc:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn every_crate_has_a_lib_or_main() {
    let root = common::workspace_root().join("crates");
    let entries = fs::read_dir(&root).expect("crates/ should be readable");

    for entry in entries.flatten() {
        let dir = entry.path();
        if !dir.join("Cargo.toml").exists() || dir.ends_with("architecture-tests") {
            continue;
        }
        assert!(
            dir.join("src/lib.rs").exists() || dir.join("src/main.rs").exists(),
            "{} has neither src/lib.rs nor src/main.rs",
            common::relative(&dir)
        );
    }
}
