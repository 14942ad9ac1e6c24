//! Template sync CLI
//!
//! Mirrors a working project back into the generator template it was
//! created from, and prunes optional features from generated projects.

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every operation succeeded.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    let output = commands::Output {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        json: cli.json,
    };

    match cli.command.unwrap_or(Commands::Sync) {
        Commands::Sync => {
            let source = match cli.source {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            let args = commands::SyncArgs {
                source,
                template: cli.template,
                config: cli.config,
            };
            commands::run_sync(&args, output)
        }
        Commands::Prune {
            project_dir,
            context,
        } => commands::run_prune(&project_dir, context.as_deref(), output),
    }
}
