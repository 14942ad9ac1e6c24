//! Sync command implementation
//!
//! Resolves the configuration, runs the [`SyncEngine`] and renders its
//! report as text or JSON.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde_json::json;

use tsync_core::{
    Action, OperationRecord, Outcome, RunReport, SyncConfig, SyncEngine, SyncOptions, UnitKind,
    UnitReport,
};

use super::{Output, print_banner, print_totals};
use crate::error::Result;

/// Config file picked up from the source root when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tsync.toml";

/// Paths the sync command works with.
#[derive(Debug, Clone)]
pub struct SyncArgs {
    pub source: PathBuf,
    pub template: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Build the effective configuration: defaults, then a config file, then
/// environment overrides.
pub fn resolve_config(source: &Path, config: Option<&Path>) -> Result<SyncConfig> {
    let config = match config {
        Some(path) => SyncConfig::load(path)?,
        None => {
            let candidate = source.join(DEFAULT_CONFIG_FILE);
            if candidate.is_file() {
                SyncConfig::load(&candidate)?
            } else {
                SyncConfig::default()
            }
        }
    };

    Ok(config.apply_env(std::env::vars()))
}

/// Run the sync command.
///
/// Returns `Ok(false)` when the run finished but some operation failed.
pub fn run_sync(args: &SyncArgs, output: Output) -> Result<bool> {
    let config = resolve_config(&args.source, args.config.as_deref())?;

    let mut engine = SyncEngine::new(
        &config,
        &args.source,
        SyncOptions {
            dry_run: output.dry_run,
        },
    );
    if let Some(template) = &args.template {
        engine = engine.with_template_root(template);
    }

    if !output.json {
        print_header(&engine, output.dry_run);
    }

    let report = engine.run()?;

    if output.json {
        print_json(&report)?;
    } else {
        for unit in &report.units {
            print_unit(unit, output.verbose);
        }
        println!();
        print_banner("Sync complete");
        print_totals(report.succeeded(), report.failed(), report.dry_run);
    }

    Ok(report.is_success())
}

fn print_header(engine: &SyncEngine<'_>, dry_run: bool) {
    let roots = engine.roots();
    print_banner("Template sync");
    println!("Source:   {}", roots.source.display());
    println!("Template: {}", roots.target.display());
    if dry_run {
        println!("Mode:     {}", "dry run (no changes)".yellow());
    } else {
        println!("Mode:     apply");
    }
    println!("{}", "=".repeat(super::RULE_WIDTH));
}

fn print_unit(unit: &UnitReport, verbose: bool) {
    match unit.kind {
        UnitKind::Missing => {
            if verbose {
                println!("{} {} (source not found)", "skipped:".dimmed(), unit.unit);
            }
        }
        UnitKind::Unsupported => {
            println!(
                "{} {} is neither a file nor a directory, skipped",
                "warning:".yellow().bold(),
                unit.unit
            );
        }
        UnitKind::File | UnitKind::Directory | UnitKind::Unscanned => {
            println!();
            println!("{} {}", "Syncing:".blue().bold(), unit.unit.cyan());
            for op in &unit.operations {
                print_operation(op, verbose);
            }
        }
    }
}

pub(crate) fn print_operation(op: &OperationRecord, verbose: bool) {
    match &op.outcome {
        Outcome::Succeeded if op.dry_run => {
            println!("  {} would {}: {}", "[dry-run]".yellow(), op.action, op.path);
        }
        Outcome::Succeeded => {
            let verb = match op.action {
                Action::Copy => "synced",
                Action::Delete => "deleted",
                Action::Scan => "scanned",
            };
            println!("  {} {}: {}", "✓".green(), verb, op.path);
        }
        Outcome::Skipped { reason } => {
            if verbose {
                println!("  {} skipped {}: {} ({})", "-".dimmed(), op.action, op.path, reason);
            }
        }
        Outcome::Failed { reason } => {
            println!(
                "  {} {} failed: {}: {}",
                "✗".red().bold(),
                op.action,
                op.path,
                reason.red()
            );
        }
    }
}

fn print_json(report: &RunReport) -> Result<()> {
    let value = json!({
        "dry_run": report.dry_run,
        "source_root": report.source_root,
        "template_root": report.template_root,
        "succeeded": report.succeeded(),
        "failed": report.failed(),
        "units": report.units,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
