//! Shared fixture locations for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Root of the checked-in fixture files
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}
