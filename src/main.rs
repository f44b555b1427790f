use clap::Parser;
use colored::Colorize;
use module_sync_rust::config::Config;
use module_sync_rust::constants::MODULES_FILE;
use module_sync_rust::git::GitClient;
use module_sync_rust::{output, registry, sync};
use std::path::PathBuf;
use std::time::Instant;

/// Synchronizes the modules listed in modules.json with their git remotes.
#[derive(Debug, Parser)]
#[command(name = "module-sync", version, about)]
struct Cli {
    /// Root directory holding modules.json and the module checkouts.
    /// Defaults to the current working directory.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Only print the final counts and failures.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print every step of every module.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_flags(cli.quiet, cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    output::print_working_dir(&root, &config);

    let entries = match registry::load(&root.join(MODULES_FILE)) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    };
    output::print_sync_start(entries.len(), &config);

    let started = Instant::now();
    let progress = output::create_sync_progress(entries.len(), &config);
    let results = sync::sync_all(&GitClient, &root, &entries, &progress);
    progress.finish();

    output::print_summary(&results, started.elapsed(), &config);
    Ok(())
}
