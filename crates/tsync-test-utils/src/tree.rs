//! [`SyncFixture`] builder for sync test scenarios.
//!
//! Lays out a source project and a template directory inside one temporary
//! directory:
//!
//! ```text
//! <tmp>/project/              source root
//! <tmp>/generator/project/    template root (parent exists, template may not)
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tempfile::TempDir;
use walkdir::WalkDir;

/// Name of the template directory under the generator directory.
pub const TEMPLATE_NAME: &str = "project";

/// A file's bytes and modification time, for before/after comparisons.
pub type FileState = (Vec<u8>, SystemTime);

/// A temporary source project plus template directory.
///
/// # Example
///
/// ```rust,no_run
/// use tsync_test_utils::tree::SyncFixture;
///
/// let fixture = SyncFixture::new();
/// fixture.write_source("app/main.py", "print('hi')");
/// fixture.write_template("app/stale.py", "old");
/// assert_eq!(fixture.template_files(), ["app/stale.py".to_string()].into());
/// ```
pub struct SyncFixture {
    temp_dir: TempDir,
}

impl Default for SyncFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncFixture {
    /// Create the source root and the template's parent directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("SyncFixture::new: failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("project"))
            .expect("SyncFixture::new: failed to create source root");
        fs::create_dir_all(temp_dir.path().join("generator"))
            .expect("SyncFixture::new: failed to create generator dir");
        Self { temp_dir }
    }

    /// The temporary directory holding both trees.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Source project root.
    pub fn source(&self) -> PathBuf {
        self.root().join("project")
    }

    /// Template root. Not created until something is written into it.
    pub fn template(&self) -> PathBuf {
        self.root().join("generator").join(TEMPLATE_NAME)
    }

    /// Template path relative to the source root, as a config would hold it.
    pub fn template_relative(&self) -> PathBuf {
        PathBuf::from("..").join("generator").join(TEMPLATE_NAME)
    }

    /// Write `content` to `rel` under the source root, creating parents.
    pub fn write_source(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.source(), rel, content)
    }

    /// Write `content` to `rel` under the template root, creating parents.
    pub fn write_template(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.template(), rel, content)
    }

    /// Copy every file under `fixture` into the source root.
    pub fn seed_source(&self, fixture: &Path) {
        copy_tree(fixture, &self.source());
    }

    /// Read a template file as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_template(&self, rel: &str) -> String {
        let path = self.template().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read template file {}: {e}", path.display()))
    }

    /// All files under the source root, relative and slash-separated.
    pub fn source_files(&self) -> BTreeSet<String> {
        list_files(&self.source())
    }

    /// All files under the template root, relative and slash-separated.
    pub fn template_files(&self) -> BTreeSet<String> {
        list_files(&self.template())
    }

    /// Contents and mtimes of every template file.
    pub fn template_snapshot(&self) -> BTreeMap<String, FileState> {
        let root = self.template();
        list_files(&root)
            .into_iter()
            .map(|rel| {
                let path = root.join(&rel);
                let bytes = fs::read(&path).expect("template_snapshot: read failed");
                let mtime = fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .expect("template_snapshot: metadata failed");
                (rel, (bytes, mtime))
            })
            .collect()
    }
}

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Could not create {}: {e}", parent.display()));
    }
    fs::write(&path, content).unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
    path
}

/// Copy the files under `from` into `to`, keeping relative paths.
///
/// # Panics
/// Panics if any file cannot be copied.
pub fn copy_tree(from: &Path, to: &Path) {
    for rel in list_files(from) {
        let target = to.join(&rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Could not create {}: {e}", parent.display()));
        }
        fs::copy(from.join(&rel), &target)
            .unwrap_or_else(|e| panic!("Could not copy {rel} into {}: {e}", to.display()));
    }
}

/// Every regular file under `root`, hidden ones included.
pub fn list_files(root: &Path) -> BTreeSet<String> {
    if !root.exists() {
        return BTreeSet::new();
    }

    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect()
}
