//! File copy and removal primitives

use std::fs;
use std::path::Path;

use filetime::FileTime;

use crate::{Error, Result};

/// Copy a file's contents, permissions and timestamps to `target`.
///
/// Missing parent directories of `target` are created. Returns the number of
/// bytes copied.
pub fn copy_file(source: &Path, target: &Path) -> Result<u64> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // fs::copy carries the permission bits over.
    let bytes = fs::copy(source, target).map_err(|e| Error::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    })?;

    let metadata = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    filetime::set_file_times(
        target,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
    .map_err(|e| Error::io(target, e))?;

    Ok(bytes)
}

/// Remove a file, or a whole directory tree if `path` is a directory.
///
/// Symbolic links are removed, never followed.
pub fn remove_path(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;

    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
    } else {
        fs::remove_file(path).map_err(|e| Error::io(path, e))
    }
}
