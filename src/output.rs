//! Progress bars, colored output, and summary formatting.
//!
//! This module provides visual feedback during module synchronization
//! including a progress bar, per-module completion lines, and colored
//! summary output.

use crate::config::Config;
use crate::constants::PROGRESS_TICK_MS;
use crate::registry::ModuleEntry;
use crate::sync::{SyncAction, SyncCallbacks, SyncOutcome, SyncResult, SyncStep};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// No-op callbacks for when progress tracking is not needed.
/// This is the null object pattern for SyncCallbacks - use it when
/// you don't need any output or progress tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallbacks;

impl SyncCallbacks for NoOpCallbacks {
    fn on_module_start(&self, _entry: &ModuleEntry, _action: SyncAction) {}
    fn on_step(&self, _entry: &ModuleEntry, _step: SyncStep) {}
    fn on_module_complete(&self, _result: &SyncResult) {}
}

/// Prints a module header in verbose mode.
pub fn print_module_header(config: &Config, entry: &ModuleEntry, action: SyncAction) {
    if !config.is_verbose() {
        return;
    }
    eprintln!(
        "\n{} {}",
        format!("[{}]", entry.name).white().bold(),
        format!("{} {}", action_label(action).to_lowercase(), entry.url).dimmed()
    );
}

/// Prints a step progress message in verbose mode.
pub fn print_step(config: &Config, step: SyncStep) {
    if !config.is_verbose() {
        return;
    }
    eprintln!("  {}", format_step_message(step).dimmed());
}

/// Prints completion status (verbose mode only).
pub fn print_completion_status(config: &Config, success: bool, error: Option<&str>) {
    if !config.is_verbose() {
        return;
    }
    if success {
        eprintln!("  {} completed successfully", "✓".green());
    } else if let Some(err) = error {
        eprintln!("  {} failed: {}", "✗".red(), err);
    }
}

/// Progress tracker for a sync run.
/// Shows a bar across all modules with the current module in the message
/// and prints a completion line per module.
/// Uses `Option` to avoid allocation when progress is hidden (quiet/verbose modes).
pub struct SyncProgress {
    bar: Option<ProgressBar>,
    config: Config,
}

impl SyncProgress {
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl SyncCallbacks for SyncProgress {
    fn on_module_start(&self, entry: &ModuleEntry, action: SyncAction) {
        print_module_header(&self.config, entry, action);
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} {}", action_label(action), entry.name));
        }
    }

    fn on_step(&self, entry: &ModuleEntry, step: SyncStep) {
        print_step(&self.config, step);
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{}: {}", entry.name, format_step_message(step)));
        }
    }

    fn on_module_complete(&self, result: &SyncResult) {
        match &result.outcome {
            SyncOutcome::Success => {
                print_completion_status(&self.config, true, None);
                if let Some(bar) = &self.bar {
                    bar.println(format!(
                        "{} {} {}",
                        "✓".green(),
                        result.name,
                        action_past(result.action)
                    ));
                }
            }
            SyncOutcome::Failed(failure) => {
                print_completion_status(&self.config, false, Some(&failure.error));
                if let Some(bar) = &self.bar {
                    bar.println(format!(
                        "{} {} failed: {}",
                        "✗".red(),
                        result.name,
                        failure.error
                    ));
                }
            }
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }
}

/// Creates the progress tracker for a sync run over `total` modules.
/// The bar is omitted in quiet and verbose modes.
#[must_use]
pub fn create_sync_progress(total: usize, config: &Config) -> SyncProgress {
    let bar = if config.is_quiet() || config.is_verbose() {
        None
    } else {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} {spinner:.cyan} {msg}")
                .unwrap()
                .progress_chars("█░"),
        );
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Some(bar)
    };

    SyncProgress {
        bar,
        config: *config,
    }
}

pub fn print_working_dir(path: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    )
}

pub fn print_sync_start(count: usize, config: &Config) {
    if config.is_quiet() {
        return;
    }
    if count == 0 {
        print_no_modules()
    } else {
        println!("{}", format!("Syncing {} modules", count).dimmed())
    }
}

pub fn print_summary(results: &[SyncResult], duration: Duration, config: &Config) {
    if config.is_quiet() {
        print_quiet_summary(results);
    } else {
        print_normal_summary(results, duration);
    }
}

fn print_quiet_summary(results: &[SyncResult]) {
    let (successes, failures): (Vec<_>, Vec<_>) = results
        .iter()
        .partition(|r| matches!(r.outcome, SyncOutcome::Success));

    // Always print count to stdout
    println!("{}/{} modules synced", successes.len(), results.len());

    // Print failures to stderr
    for result in &failures {
        if let SyncOutcome::Failed(failure) = &result.outcome {
            eprintln!("error: {}: {}", result.name, failure.error);
        }
    }
}

fn print_normal_summary(results: &[SyncResult], duration: Duration) {
    print_section("Summary");
    let (successes, failures): (Vec<_>, Vec<_>) = results
        .iter()
        .partition(|r| matches!(r.outcome, SyncOutcome::Success));

    print_successes(&successes);
    print_failures(&failures);

    println!(
        "{}: {}/{} modules in {}",
        "Total".white().bold(),
        successes.len(),
        results.len(),
        format_duration(duration)
    );
}

fn print_no_modules() {
    println!("{}", "No modules to sync".yellow().bold())
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f32())
}

fn print_section(title: &str) {
    let line = "=".repeat(50).cyan().dimmed();
    let padding = (50 - title.len()) / 2;
    let centered = format!("{:>width$}", title, width = padding + title.len());
    println!("\n{}\n{}\n{}\n", line, centered.cyan().bold(), line);
}

fn print_successes(successes: &[&SyncResult]) {
    if successes.is_empty() {
        return;
    }
    println!(
        "{}",
        format!("Succeeded ({}):", successes.len()).green().bold()
    );

    for result in successes {
        println!(
            "  {} {} {} in {}",
            "OK".green().bold(),
            result.name.white(),
            action_past(result.action).cyan(),
            format_duration(result.duration).dimmed(),
        );
    }
    println!();
}

fn print_failures(failures: &[&SyncResult]) {
    if failures.is_empty() {
        return;
    }

    println!("{}", format!("Failed ({}):", failures.len()).red().bold());

    for result in failures {
        if let SyncOutcome::Failed(failure) = &result.outcome {
            println!(
                "  {} {} {} in {}",
                "FAIL".red().bold(),
                result.name.white(),
                format!("at {:?}: {}", failure.step, failure.error).red(),
                format_duration(result.duration).dimmed(),
            );
        }
    }
    println!();
}

fn action_label(action: SyncAction) -> &'static str {
    match action {
        SyncAction::Clone => "Cloning",
        SyncAction::Update => "Updating",
    }
}

fn action_past(action: SyncAction) -> &'static str {
    match action {
        SyncAction::Clone => "cloned",
        SyncAction::Update => "updated",
    }
}

fn format_step_message(step: SyncStep) -> &'static str {
    match step {
        SyncStep::Started => "Starting sync...",
        SyncStep::Cloning => "Cloning from remote...",
        SyncStep::Fetching => "Fetching from remote...",
        SyncStep::Pulling => "Pulling changes...",
        SyncStep::Completed => "Completed",
    }
}
