//! Prune command implementation

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use tsync_core::{GeneratorContext, PruneReport, default_features, prune};

use super::sync::print_operation;
use super::{Output, print_banner, print_totals};
use crate::error::{CliError, Result};

/// Run the prune command against a generated project.
///
/// `context` is the generator's JSON answers; when absent they are read
/// from the environment.
pub fn run_prune(project_dir: &Path, context: Option<&str>, output: Output) -> Result<bool> {
    if !project_dir.is_dir() {
        return Err(CliError::user(format!(
            "Project directory not found: {}",
            project_dir.display()
        )));
    }

    let context = match context {
        Some(json) => GeneratorContext::parse(json),
        None => GeneratorContext::from_env(std::env::vars()),
    };

    let report = prune(project_dir, &context, &default_features(), output.dry_run);

    if output.json {
        print_json(&report)?;
    } else {
        print_report(&report, output.verbose);
    }

    Ok(report.is_success())
}

fn print_report(report: &PruneReport, verbose: bool) {
    print_banner("Prune optional features");
    println!("Project: {}", report.project_dir.display());
    println!("{}", "=".repeat(super::RULE_WIDTH));

    for feature in &report.features {
        println!();
        if feature.included {
            println!(
                "{} {} = {:?}",
                "Keeping:".green().bold(),
                feature.key.cyan(),
                feature.answer
            );
        } else {
            println!(
                "{} {} = {:?}",
                "Removing:".blue().bold(),
                feature.key.cyan(),
                feature.answer
            );
            for op in &feature.operations {
                print_operation(op, verbose);
            }
        }
    }

    println!();
    print_banner("Prune complete");
    print_totals(report.succeeded(), report.failed(), report.dry_run);
}

fn print_json(report: &PruneReport) -> Result<()> {
    let value = json!({
        "dry_run": report.dry_run,
        "project_dir": report.project_dir,
        "succeeded": report.succeeded(),
        "failed": report.failed(),
        "features": report.features,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
