//! Outcome and report types for sync and prune runs

use std::path::PathBuf;

use serde::Serialize;
use tsync_fs::NormalizedPath;

/// Result of a single file operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The operation was applied, or would be in dry-run mode
    Succeeded,
    /// Nothing to do
    Skipped { reason: String },
    /// The operation failed; processing continued with the next file
    Failed { reason: String },
}

impl Outcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(reason: impl ToString) -> Self {
        Self::Failed {
            reason: reason.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Kind of file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Copy,
    Delete,
    /// Enumerating a unit's trees
    Scan,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Copy => "copy",
            Self::Delete => "delete",
            Self::Scan => "scan",
        };
        write!(f, "{}", s)
    }
}

/// One executed (or planned, in dry-run mode) operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub action: Action,
    /// Path relative to the unit's base root
    pub path: NormalizedPath,
    pub outcome: Outcome,
    pub dry_run: bool,
}

/// What a sync unit turned out to be on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    File,
    Directory,
    /// Source path does not exist; the unit is skipped
    Missing,
    /// Exists but is neither a regular file nor a directory
    Unsupported,
    /// Planning failed before the unit could be classified
    Unscanned,
}

/// Operations performed for one sync unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    pub unit: String,
    pub kind: UnitKind,
    pub operations: Vec<OperationRecord>,
}

impl UnitReport {
    pub fn new(unit: impl Into<String>, kind: UnitKind) -> Self {
        Self {
            unit: unit.into(),
            kind,
            operations: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        count(&self.operations, Outcome::is_success)
    }

    pub fn failed(&self) -> usize {
        count(&self.operations, Outcome::is_failure)
    }

    /// Relative paths of the operations with the given action.
    pub fn paths(&self, action: Action) -> Vec<&NormalizedPath> {
        self.operations
            .iter()
            .filter(|op| op.action == action)
            .map(|op| &op.path)
            .collect()
    }
}

/// Aggregate result of a full sync run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub source_root: PathBuf,
    pub template_root: PathBuf,
    pub units: Vec<UnitReport>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.units.iter().map(UnitReport::succeeded).sum()
    }

    pub fn failed(&self) -> usize {
        self.units.iter().map(UnitReport::failed).sum()
    }

    /// A run succeeds when no operation failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn unit(&self, name: &str) -> Option<&UnitReport> {
        self.units.iter().find(|u| u.unit == name)
    }
}

pub(crate) fn count(operations: &[OperationRecord], pred: fn(&Outcome) -> bool) -> usize {
    operations.iter().filter(|op| pred(&op.outcome)).count()
}
