// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tap_harness::{Harness, HarnessConfig};
use tempfile::TempDir;

/// A harness that writes into memory, with every output enabled and no color.
pub fn plain_harness() -> Harness<Vec<u8>> {
    Harness::with_writer(HarnessConfig::plain(), Vec::new())
}

pub fn harness_with(config: HarnessConfig) -> Harness<Vec<u8>> {
    Harness::with_writer(config, Vec::new())
}

/// Everything the harness has written so far.
pub fn output_of(harness: &Harness<Vec<u8>>) -> String {
    String::from_utf8(harness.writer().clone()).expect("harness output is UTF-8")
}

pub fn lines_of(harness: &Harness<Vec<u8>>) -> Vec<String> {
    output_of(harness).lines().map(str::to_string).collect()
}

/// Writes a `Tap.toml` with the given content into `temp_dir`.
pub fn write_tap_toml(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("Tap.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Helper function to create an invalid TOML configuration
pub fn create_invalid_toml(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("invalid.toml");
    let content = r#"
language = "en"
# Invalid TOML - unterminated table header
[output
disable-color = true
"#;
    fs::write(&path, content).unwrap();
    path
}
