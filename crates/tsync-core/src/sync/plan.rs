//! Copy/delete planning for a single sync unit

use std::path::{Path, PathBuf};

use tsync_fs::{ExcludeFilter, NormalizedPath, PathSet, enumerate_files};

use crate::Result;

/// The two base directories every relative path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRoots {
    /// Source project root
    pub source: PathBuf,
    /// Template directory
    pub target: PathBuf,
}

impl SyncRoots {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source_path(&self, path: &NormalizedPath) -> PathBuf {
        path.under(&self.source)
    }

    pub fn target_path(&self, path: &NormalizedPath) -> PathBuf {
        path.under(&self.target)
    }
}

/// Files to copy into and delete from the target for one directory unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub to_copy: PathSet,
    pub to_delete: PathSet,
    /// Entries that could not be enumerated on either side
    pub scan_failures: Vec<String>,
}

impl SyncPlan {
    /// Plan from enumerated source and target sets.
    ///
    /// Everything in the source is copied; files present in both are simply
    /// overwritten. Only target files absent from the source are deleted.
    pub fn from_sets(source_files: PathSet, target_files: &PathSet) -> Self {
        let to_delete = target_files.difference(&source_files).cloned().collect();
        Self {
            to_copy: source_files,
            to_delete,
            scan_failures: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_copy.is_empty() && self.to_delete.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.scan_failures.is_empty()
    }
}

/// How a unit will be synchronized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitPlan {
    /// Copy one explicitly listed file; the filter does not apply
    File(NormalizedPath),
    Directory(SyncPlan),
    /// The source path does not exist
    Missing,
    /// The source exists but is neither a file nor a directory
    Unsupported,
}

/// Build the plan for `unit`, a path relative to both roots.
///
/// # Errors
///
/// Only fails if enumeration cannot express a walked path relative to its
/// root, which points at a broken root configuration.
pub fn plan_unit(unit: &NormalizedPath, roots: &SyncRoots, filter: &ExcludeFilter) -> Result<UnitPlan> {
    let source = roots.source_path(unit);

    if source.is_file() {
        return Ok(UnitPlan::File(unit.clone()));
    }

    if source.is_dir() {
        let target = roots.target_path(unit);
        return Ok(UnitPlan::Directory(plan_directory(&source, &target, roots, filter)?));
    }

    if exists_at_all(&source) {
        return Ok(UnitPlan::Unsupported);
    }

    Ok(UnitPlan::Missing)
}

fn plan_directory(
    source: &Path,
    target: &Path,
    roots: &SyncRoots,
    filter: &ExcludeFilter,
) -> Result<SyncPlan> {
    let source_scan = enumerate_files(source, &roots.source, filter)?;
    let target_scan = enumerate_files(target, &roots.target, filter)?;
    let source_complete = source_scan.is_complete();

    let mut plan = SyncPlan::from_sets(source_scan.files, &target_scan.files);

    // A partial source set would turn unread files into deletions.
    if !source_complete {
        tracing::warn!(
            source = %source.display(),
            held_back = plan.to_delete.len(),
            "Source scan incomplete, no deletes for this unit"
        );
        plan.to_delete.clear();
    }

    plan.scan_failures = source_scan
        .errors
        .iter()
        .chain(&target_scan.errors)
        .map(ToString::to_string)
        .collect();

    tracing::debug!(
        source = %source.display(),
        copy = plan.to_copy.len(),
        delete = plan.to_delete.len(),
        failures = plan.scan_failures.len(),
        "Planned directory unit"
    );
    Ok(plan)
}

/// `Path::exists` follows symlinks; a dangling link still "exists" here.
fn exists_at_all(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
