//! Error types for tsync-core

use std::path::PathBuf;

/// Result type for tsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a whole run.
///
/// Per-file failures never surface here; they are recorded as
/// [`crate::Outcome::Failed`] in the run report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory that should contain the template does not exist
    #[error("Template parent directory does not exist: {path}")]
    TemplateParentMissing { path: PathBuf },

    /// The template directory could not be created
    #[error("Failed to create template directory {path}: {source}")]
    TemplateCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from tsync-fs
    #[error(transparent)]
    Fs(#[from] tsync_fs::Error),
}
