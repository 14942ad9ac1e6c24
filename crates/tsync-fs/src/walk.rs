//! Tree enumeration under an exclusion filter

use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, ExcludeFilter, NormalizedPath, PathSet, Result};

/// Files found under a root, plus everything that could not be read.
#[derive(Debug, Default)]
pub struct Enumeration {
    pub files: PathSet,
    /// Unreadable entries and names that are not valid UTF-8. Files under an
    /// unreadable directory are missing from `files`.
    pub errors: Vec<Error>,
}

impl Enumeration {
    /// True when every entry under the root was read.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Collect every file under `root`, expressed relative to `base`.
///
/// Directories rejected by `filter` are pruned and never descended into;
/// rejected files are left out. A missing `root` yields an empty set.
/// Entries that cannot be read, and file names that are not valid UTF-8, are
/// collected in [`Enumeration::errors`] and the walk carries on.
///
/// # Errors
///
/// Returns [`Error::OutsideBase`] if `root` is not under `base`.
pub fn enumerate_files(root: &Path, base: &Path, filter: &ExcludeFilter) -> Result<Enumeration> {
    let mut found = Enumeration::default();

    if !root.exists() {
        return Ok(found);
    }

    if root.strip_prefix(base).is_err() {
        return Err(Error::OutsideBase {
            path: root.to_path_buf(),
            base: base.to_path_buf(),
        });
    }

    // Exclusion only needs a lossy view; undecodable names are reported below.
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || entry
                .path()
                .strip_prefix(base)
                .map(|relative| !filter.is_excluded(&NormalizedPath::new(relative)))
                .unwrap_or(true)
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                tracing::warn!("Could not read {} while walking: {}", path.display(), e);
                found.errors.push(Error::Walk {
                    path,
                    message: e.to_string(),
                });
                continue;
            }
        };

        if entry.path().is_file() {
            match NormalizedPath::relative_to(entry.path(), base) {
                Ok(relative) => {
                    found.files.insert(relative);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    found.errors.push(e);
                }
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        count = found.files.len(),
        errors = found.errors.len(),
        "Enumerated files"
    );
    Ok(found)
}
