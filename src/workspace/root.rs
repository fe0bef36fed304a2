use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::MARKER_FILE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("gong: no parent dir with .gong")]
    NotFound,
}

/// Walk from `start` towards `/` and return the first directory holding the marker file.
pub fn locate_root(start: &Path) -> Result<PathBuf, LocateError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(MARKER_FILE).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(LocateError::NotFound);
        }
    }
}

/// Like [`locate_root`], starting from the process working directory.
///
/// `Ok(None)` means no project exists yet; an unusable working directory is an error.
pub fn locate_root_from_cwd() -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().context("can't get working directory")?;
    Ok(locate_root(&cwd).ok())
}
