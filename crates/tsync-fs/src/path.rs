//! Normalized path handling for cross-platform matching

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A set of paths relative to some declared root.
///
/// Ordered so that plans and reports come out in a stable order, even though
/// nothing depends on that order.
pub type PathSet = BTreeSet<NormalizedPath>;

/// A path normalized to use forward slashes internally.
///
/// Exclusion patterns are matched against the string form, so every path is
/// kept with forward slashes and only converted to the platform-native form
/// at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Express `path` relative to `base`.
    ///
    /// Unlike [`NormalizedPath::new`] this never substitutes replacement
    /// characters: the result must resolve back to the same file through
    /// [`NormalizedPath::under`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideBase`] if `path` does not live under `base`,
    /// or [`Error::NonUtf8Path`] if the relative part is not valid UTF-8.
    pub fn relative_to(path: &Path, base: &Path) -> Result<Self> {
        let relative = path.strip_prefix(base).map_err(|_| Error::OutsideBase {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })?;

        match relative.to_str() {
            Some(s) => Ok(Self::new(s)),
            None => Err(Error::NonUtf8Path {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Resolve this (relative) path against a native root directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        self.inner
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }

    /// Get the final path segment.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl serde::Serialize for NormalizedPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}
