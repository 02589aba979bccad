//! Shared test utilities for request and response integration tests
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

pub const ENDPOINT: &str = "http://localhost:8000/predict";

/// Write `contents` to `<tempdir>/<name>` and hand back both; keep the dir alive for the test
pub fn write_audio(name: &str, contents: &[u8]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (path, temp_dir)
}

/// Split `haystack` on every occurrence of `needle`
pub fn split_bytes<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut segments = Vec::new();
    let mut rest = haystack;
    while let Some(pos) = rest.windows(needle.len()).position(|w| w == needle) {
        segments.push(&rest[..pos]);
        rest = &rest[pos + needle.len()..];
    }
    segments.push(rest);
    segments
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
