//! Loading expected-output files.
//!
//! Every loader reads UTF-8 and normalizes line endings with
//! [`new_lines`], so fixtures compare equal regardless of checkout
//! settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::normalize::new_lines;

pub fn load_file(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "loaded fixture file");
    Ok(new_lines(Some(&contents)))
}

/// Load `prefix/directory/subdirectory/file_name`.
pub fn load_fixture(
    prefix: impl AsRef<Path>,
    directory: &str,
    subdirectory: &str,
    file_name: &str,
) -> io::Result<String> {
    load_file(prefix.as_ref().join(directory).join(subdirectory).join(file_name))
}

/// Load a fixture stored next to a module, with `a::b` mapped to `a/b`.
///
/// Pass `module_path!()` to keep fixtures beside the tests that use them.
pub fn load_module_fixture(
    prefix: impl AsRef<Path>,
    module_path: &str,
    subdirectory: &str,
    file_name: &str,
) -> io::Result<String> {
    let module_dir: PathBuf = module_path.split("::").collect();
    load_file(prefix.as_ref().join(module_dir).join(subdirectory).join(file_name))
}
