//! Exclusion filter for synchronized trees
//!
//! Matching is deliberately coarse: a pattern excludes a path when it occurs
//! anywhere in the path string, or when it equals the final segment once
//! wildcards and slashes are stripped. Wildcards are never expanded, so
//! `*.pyc` only catches a segment literally named `.pyc`.

use crate::NormalizedPath;

/// Dotfile that survives the hidden-file rule.
pub const PRESERVED_DOTFILE: &str = ".gitkeep";

/// Decides which relative paths take part in a sync.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<String>,
}

impl ExcludeFilter {
    /// Build a filter from exclusion patterns.
    ///
    /// Empty patterns are dropped: as a substring they would match every path.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// The configured patterns, in order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether a relative path is excluded.
    pub fn is_excluded(&self, path: &NormalizedPath) -> bool {
        let path_str = path.as_str();
        let name = path.file_name().unwrap_or("");

        if self
            .patterns
            .iter()
            .any(|pattern| path_str.contains(pattern.as_str()) || name == bare_name(pattern))
        {
            return true;
        }

        is_hidden(name)
    }
}

/// Whether a final segment is a hidden file other than the preserved one.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != PRESERVED_DOTFILE
}

/// A pattern with wildcard and slash characters removed.
fn bare_name(pattern: &str) -> String {
    pattern.replace(['*', '/'], "")
}
