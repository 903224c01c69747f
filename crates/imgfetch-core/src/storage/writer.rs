//! Directory creation and image writes.

use crate::error::FetchError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Creates the output directory (and parents) if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))
}

/// Writes the whole body to `path` in one call, replacing any existing file.
pub fn write_image(path: &Path, body: &[u8]) -> Result<(), FetchError> {
    fs::write(path, body).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
