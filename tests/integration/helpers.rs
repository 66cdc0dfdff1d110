//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use clipoffset::Config;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture as a `Config`.
pub fn load_fixture(name: &str) -> Config {
    Config::load(Some(fixture_path(name).as_path())).expect("fixture should parse")
}

/// Copy a fixture into a fresh temp dir, returning both.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::copy(fixture_path(name), &path).expect("Failed to copy fixture");
    (dir, path)
}
