//! Template synchronization engine for template-sync
//!
//! This crate sits between the filesystem primitives and the CLI:
//!
//! - **Configuration**: Compiled defaults, optional config file, environment overrides
//! - **SyncEngine**: Reconciles the source project's units into the template directory
//! - **Pruning**: Removes switched-off optional features from a rendered project
//!
//! # Architecture
//!
//! ```text
//!        tsync-cli
//!            |
//!       tsync-core
//!            |
//!        tsync-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tsync_core::{SyncConfig, SyncEngine, SyncOptions};
//!
//! fn example() -> tsync_core::Result<()> {
//!     let config = SyncConfig::default();
//!     let engine = SyncEngine::new(&config, "/work/project", SyncOptions { dry_run: true });
//!     let report = engine.run()?;
//!     println!("{} succeeded, {} failed", report.succeeded(), report.failed());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod prune;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use prune::{GeneratorContext, OptionalFeature, PruneReport, default_features, prune};
pub use sync::{
    Action, Executor, OperationRecord, Outcome, RunReport, SyncEngine, SyncOptions, SyncPlan,
    SyncRoots, UnitKind, UnitPlan, UnitReport,
};
