//! Shared helpers for architecture tests: workspace discovery and source walking.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| {
            std::fs::read_to_string(dir.join("Cargo.toml"))
                .is_ok_and(|content| content.contains("[workspace]"))
        })
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// All `.rs` files under `crates/`, skipping build output and this crate.
pub fn crate_sources() -> Vec<PathBuf> {
    let crates_dir = workspace_root().join("crates");
    assert!(crates_dir.exists(), "crates/ directory not found at {:?}", crates_dir);

    WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Path relative to the workspace root, for readable failure messages.
pub fn relative(path: &Path) -> String {
    path.strip_prefix(workspace_root())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Test code: integration tests, `tests/` submodules, and `*_tests.rs` files.
pub fn is_test_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs")
}
