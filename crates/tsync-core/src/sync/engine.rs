//! SyncEngine implementation
//!
//! The SyncEngine walks the configured units in order and, for each, builds
//! a plan and hands it to the [`Executor`]. Units are independent: a unit's
//! failures are tallied in its report and never stop the next unit.

use std::fs;
use std::path::{Path, PathBuf};

use tsync_fs::{ExcludeFilter, NormalizedPath};

use crate::config::SyncConfig;
use crate::{Error, Result};

use super::executor::Executor;
use super::plan::{SyncRoots, UnitPlan, plan_unit};
use super::report::{RunReport, UnitKind, UnitReport};

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, report planned operations without modifying the filesystem.
    pub dry_run: bool,
}

/// Engine for synchronizing a source project into its template
pub struct SyncEngine<'a> {
    config: &'a SyncConfig,
    roots: SyncRoots,
    filter: ExcludeFilter,
    executor: Executor,
}

impl<'a> SyncEngine<'a> {
    /// Create an engine for `source_root`, with the template directory taken
    /// from `config`.
    pub fn new(config: &'a SyncConfig, source_root: impl Into<PathBuf>, options: SyncOptions) -> Self {
        let source_root = source_root.into();
        let template_root = config.template_root(&source_root);

        Self {
            config,
            roots: SyncRoots::new(source_root, template_root),
            filter: config.filter(),
            executor: Executor::new(options.dry_run),
        }
    }

    /// Override the template directory resolved from the config.
    pub fn with_template_root(mut self, template_root: impl Into<PathBuf>) -> Self {
        self.roots.target = template_root.into();
        self
    }

    pub fn roots(&self) -> &SyncRoots {
        &self.roots
    }

    /// Check that the template can be written to, creating it if needed.
    ///
    /// Nothing is created in dry-run mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateParentMissing`] if the template's parent
    /// directory does not exist, or [`Error::TemplateCreate`] if the template
    /// directory cannot be created.
    pub fn prepare(&self) -> Result<()> {
        let template = &self.roots.target;
        let parent = match template.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            Some(_) => Path::new("."),
            None => template.as_path(),
        };

        if !parent.is_dir() {
            return Err(Error::TemplateParentMissing {
                path: parent.to_path_buf(),
            });
        }

        if !self.executor.is_dry_run() {
            fs::create_dir_all(template).map_err(|source| Error::TemplateCreate {
                path: template.clone(),
                source,
            })?;
        }

        Ok(())
    }

    /// Run the full sync: structural check, then every unit in order.
    ///
    /// # Errors
    ///
    /// Only structural failures from [`SyncEngine::prepare`] are returned;
    /// per-file failures are part of the report.
    pub fn run(&self) -> Result<RunReport> {
        self.prepare()?;

        let units = self
            .config
            .units
            .iter()
            .map(|unit| self.sync_unit(unit))
            .collect();

        Ok(RunReport {
            dry_run: self.executor.is_dry_run(),
            source_root: self.roots.source.clone(),
            template_root: self.roots.target.clone(),
            units,
        })
    }

    /// Plan and execute a single unit.
    pub fn sync_unit(&self, unit: &str) -> UnitReport {
        let path = NormalizedPath::new(unit.trim_end_matches(['/', '\\']));

        let plan = match plan_unit(&path, &self.roots, &self.filter) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::warn!(unit, "Could not plan unit: {}", e);
                let mut report = UnitReport::new(unit, UnitKind::Unscanned);
                report.operations.push(self.executor.scan_failed(&path, e));
                return report;
            }
        };

        match plan {
            UnitPlan::File(file) => {
                let mut report = UnitReport::new(unit, UnitKind::File);
                report.operations.push(self.executor.copy(
                    &file,
                    &self.roots.source_path(&file),
                    &self.roots.target_path(&file),
                ));
                report
            }
            UnitPlan::Directory(plan) => {
                let mut report = UnitReport::new(unit, UnitKind::Directory);
                report.operations = plan
                    .scan_failures
                    .iter()
                    .map(|reason| self.executor.scan_failed(&path, reason))
                    .collect();
                report.operations.extend(self.executor.apply(&plan, &self.roots));
                report
            }
            UnitPlan::Missing => {
                tracing::debug!(unit, "Skipping missing source path");
                UnitReport::new(unit, UnitKind::Missing)
            }
            UnitPlan::Unsupported => {
                tracing::warn!(unit, "Skipping source path of unsupported type");
                UnitReport::new(unit, UnitKind::Unsupported)
            }
        }
    }
}
