//! Applies sync plans to the filesystem

use std::io::ErrorKind;
use std::path::Path;

use tsync_fs::{NormalizedPath, io};

use super::plan::{SyncPlan, SyncRoots};
use super::report::{Action, OperationRecord, Outcome};

/// Executes copy and delete operations one file at a time.
///
/// Every failure is caught at the operation and recorded; nothing aborts the
/// remaining work. In dry-run mode no filesystem call that mutates anything
/// is made and every operation is recorded as a success.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor {
    dry_run: bool,
}

impl Executor {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Copy `source` over `target`, creating parent directories as needed.
    pub fn copy(&self, path: &NormalizedPath, source: &Path, target: &Path) -> OperationRecord {
        let outcome = if self.dry_run {
            tracing::info!("[dry-run] Would copy {} -> {}", source.display(), target.display());
            Outcome::Succeeded
        } else {
            match io::copy_file(source, target) {
                Ok(bytes) => {
                    tracing::debug!(%path, bytes, "Copied");
                    Outcome::Succeeded
                }
                Err(e) => {
                    tracing::warn!("Copy failed for {}: {}", path, e);
                    Outcome::failed(e)
                }
            }
        };

        self.record(Action::Copy, path, outcome)
    }

    /// Remove `target`, recursively if it is a directory.
    ///
    /// A target that is already gone is recorded as skipped; any other error
    /// while looking it up is a failure.
    pub fn delete(&self, path: &NormalizedPath, target: &Path) -> OperationRecord {
        let outcome = match std::fs::symlink_metadata(target) {
            Err(e) if e.kind() == ErrorKind::NotFound => Outcome::skipped("already absent"),
            Err(e) => {
                let e = tsync_fs::Error::io(target, e);
                tracing::warn!("Delete failed for {}: {}", path, e);
                Outcome::failed(e)
            }
            Ok(_) => self.remove(path, target),
        };

        self.record(Action::Delete, path, outcome)
    }

    /// Record a unit whose trees could not be fully enumerated.
    pub fn scan_failed(&self, path: &NormalizedPath, reason: impl ToString) -> OperationRecord {
        self.record(Action::Scan, path, Outcome::failed(reason))
    }

    fn remove(&self, path: &NormalizedPath, target: &Path) -> Outcome {
        if self.dry_run {
            tracing::info!("[dry-run] Would delete {}", target.display());
            Outcome::Succeeded
        } else {
            match io::remove_path(target) {
                Ok(()) => {
                    tracing::debug!(%path, "Deleted");
                    Outcome::Succeeded
                }
                Err(e) => {
                    tracing::warn!("Delete failed for {}: {}", path, e);
                    Outcome::failed(e)
                }
            }
        }
    }

    /// Apply a directory plan: all copies first, then all deletes.
    pub fn apply(&self, plan: &SyncPlan, roots: &SyncRoots) -> Vec<OperationRecord> {
        let copies = plan
            .to_copy
            .iter()
            .map(|path| self.copy(path, &roots.source_path(path), &roots.target_path(path)));

        let deletes = plan
            .to_delete
            .iter()
            .map(|path| self.delete(path, &roots.target_path(path)));

        copies.chain(deletes).collect()
    }

    fn record(&self, action: Action, path: &NormalizedPath, outcome: Outcome) -> OperationRecord {
        OperationRecord {
            action,
            path: path.clone(),
            outcome,
            dry_run: self.dry_run,
        }
    }
}
