//! Sync configuration
//!
//! A [`SyncConfig`] is assembled explicitly: compiled defaults, then an
//! optional config file, then environment overrides. The result is passed by
//! reference to whatever needs it.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tsync_fs::{ConfigStore, ExcludeFilter, NormalizedPath};

use crate::Result;

/// Overrides [`SyncConfig::template_dir`].
pub const ENV_TEMPLATE_DIR: &str = "TSYNC_TEMPLATE_DIR";

/// Comma-separated patterns appended to [`SyncConfig::excludes`].
pub const ENV_EXTRA_EXCLUDES: &str = "TSYNC_EXTRA_EXCLUDES";

/// What to synchronize and what to leave out.
///
/// Fields missing from a config file keep their compiled defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Template directory, relative to the source root unless absolute
    pub template_dir: PathBuf,

    /// Top-level sync units (files or directories), relative to both roots
    pub units: Vec<String>,

    /// Exclusion patterns, see [`tsync_fs::filter`]
    pub excludes: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(defaults::TEMPLATE_DIR),
            units: defaults::SYNC_UNITS.iter().map(|s| s.to_string()).collect(),
            excludes: defaults::EXCLUDE_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let config = ConfigStore::new().load(&NormalizedPath::new(path))?;
        tracing::debug!(?path, "Loaded sync config");
        Ok(config)
    }

    /// Apply environment overrides from `(key, value)` pairs.
    ///
    /// Takes the variables as input instead of reading the process
    /// environment, so callers pass `std::env::vars()` and tests pass a
    /// literal list. Unknown keys are ignored.
    pub fn apply_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let value: String = value.into();
            match key.as_ref() {
                ENV_TEMPLATE_DIR => {
                    let value = value.trim();
                    if !value.is_empty() {
                        self.template_dir = PathBuf::from(value);
                    }
                }
                ENV_EXTRA_EXCLUDES => {
                    self.excludes.extend(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|p| !p.is_empty())
                            .map(String::from),
                    );
                }
                _ => {}
            }
        }
        self
    }

    /// Resolve the template directory against the source root.
    pub fn template_root(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.template_dir)
    }

    /// Build the exclusion filter for this configuration.
    pub fn filter(&self) -> ExcludeFilter {
        ExcludeFilter::new(self.excludes.iter().cloned())
    }
}
