//! Atomic file output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FigureError, Result};

/// Create `dir` and any missing parents. Succeeds if it already exists.
///
/// # Errors
/// Returns `CreateDir` if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| FigureError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Sibling temp file used while writing `path`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "output".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

/// Write `content` to `path` through a temp file and rename.
///
/// Readers see either the previous file or the complete new one; a failed
/// write leaves no temp file behind and the original untouched.
///
/// # Errors
/// Returns `FileWrite` if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    let to_error = |source| FigureError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Err(source) = fs::write(&temp, content) {
        let _ = fs::remove_file(&temp);
        return Err(to_error(source));
    }
    if let Err(source) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(to_error(source));
    }
    Ok(())
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
