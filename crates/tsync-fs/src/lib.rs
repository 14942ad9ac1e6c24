//! Filesystem primitives for template-sync
//!
//! Provides normalized relative paths, the exclusion filter, tree
//! enumeration and the copy/remove operations the sync engine is built on.

pub mod config;
pub mod error;
pub mod filter;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use filter::ExcludeFilter;
pub use path::{NormalizedPath, PathSet};
pub use walk::{Enumeration, enumerate_files};
