//! Git command wrappers.
//!
//! This module provides a thin wrapper around git CLI commands,
//! handling command execution and error formatting. The synchronizer
//! talks to git through the [`VcsClient`] trait so it can be tested
//! without spawning processes.

use anyhow::Context;
use std::path::Path;

pub fn run_git(cwd: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = std::process::Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .context("Failed to execute git command")?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr)
    }
}

fn validate_module_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty()
        || name.contains('\0')
        || name.contains('\n')
        || name.contains('/')
        || name.contains('\\')
        || name == "."
        || name == ".."
        || name.starts_with('-')
    {
        anyhow::bail!("Invalid module name: {:?}", name);
    }
    Ok(())
}

/// Version-control operations the synchronizer needs.
///
/// Implementations report only success or failure per invocation;
/// command output is never interpreted.
pub trait VcsClient {
    /// Clones `url` into a new directory `name` under `root`.
    fn clone_repo(&self, root: &Path, url: &str, name: &str) -> anyhow::Result<()>;

    /// Fetches new remote changes for the checkout at `root/name`.
    fn fetch(&self, root: &Path, name: &str) -> anyhow::Result<()>;

    /// Pulls fetched changes into the checkout at `root/name`.
    fn pull(&self, root: &Path, name: &str) -> anyhow::Result<()>;
}

/// [`VcsClient`] backed by the real git CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitClient;

impl VcsClient for GitClient {
    fn clone_repo(&self, root: &Path, url: &str, name: &str) -> anyhow::Result<()> {
        validate_module_name(name)?;
        run_git(root, &["clone", url, name])
            .with_context(|| format!("Failed to clone '{}'", url))?;
        Ok(())
    }

    fn fetch(&self, root: &Path, name: &str) -> anyhow::Result<()> {
        validate_module_name(name)?;
        run_git(&root.join(name), &["fetch"]).context("Failed to fetch from remote")?;
        Ok(())
    }

    fn pull(&self, root: &Path, name: &str) -> anyhow::Result<()> {
        validate_module_name(name)?;
        run_git(&root.join(name), &["pull"]).context("Failed to pull from remote")?;
        Ok(())
    }
}
