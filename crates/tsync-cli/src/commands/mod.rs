//! Command implementations for the tsync CLI

pub mod prune;
pub mod sync;

pub use prune::run_prune;
pub use sync::{SyncArgs, run_sync};

use colored::Colorize;

/// Width of the banner rules framing the text report.
const RULE_WIDTH: usize = 60;

/// Output flags shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub dry_run: bool,
    pub verbose: bool,
    pub json: bool,
}

/// Print a banner: rule, title, rule.
pub(crate) fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("{}", title.bold());
    println!("{}", rule);
}

/// Print the closing totals shared by sync and prune.
pub(crate) fn print_totals(succeeded: usize, failed: usize, dry_run: bool) {
    let failed_label = format!("{}", failed);
    println!("Succeeded: {}", succeeded.to_string().green());
    if failed > 0 {
        println!("Failed:    {}", failed_label.red().bold());
    } else {
        println!("Failed:    {}", failed_label);
    }

    if dry_run {
        println!();
        println!(
            "{} This was a dry run, nothing was changed. Run without {} to apply.",
            "Note:".yellow().bold(),
            "--dry-run".cyan()
        );
    }
}
