//! Project-to-template synchronization
//!
//! This module provides:
//! - **plan**: Compute the copy/delete sets for one sync unit
//! - **executor**: Apply a plan, catching and recording every failure
//! - **report**: Per-operation outcomes aggregated into a run report
//! - **engine**: Drive all configured units through plan and execute

mod engine;
mod executor;
mod plan;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use executor::Executor;
pub use plan::{SyncPlan, SyncRoots, UnitPlan, plan_unit};
pub use report::{Action, OperationRecord, Outcome, RunReport, UnitKind, UnitReport};
pub(crate) use report::count as report_count;
