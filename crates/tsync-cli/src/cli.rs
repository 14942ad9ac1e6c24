//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Template sync - Mirror a working project back into its generator template
#[derive(Parser, Debug)]
#[command(name = "tsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show skipped paths and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Report what would change without touching the filesystem
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Print the run report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Source project root (defaults to the current directory)
    #[arg(long, global = true, env = "TSYNC_SOURCE_ROOT")]
    pub source: Option<PathBuf>,

    /// Template directory, overriding the configured one
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,

    /// Config file (TOML, JSON or YAML)
    ///
    /// When omitted, `tsync.toml` in the source root is used if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run (defaults to `sync`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize the configured units into the template
    ///
    /// Copies every non-excluded file from the source project into the
    /// template and deletes template files that no longer exist in the
    /// source.
    ///
    /// Examples:
    ///   tsync                     # Sync the current directory
    ///   tsync --dry-run -v        # Preview every operation
    ///   tsync sync --json         # Machine-readable report
    Sync,

    /// Remove files of switched-off optional features from a generated project
    Prune {
        /// Generated project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Generator answers as a JSON object
        ///
        /// Falls back to the COOKIECUTTER_CONTEXT environment variable.
        #[arg(long)]
        context: Option<String>,
    },
}
