mod common;

use common::RemoteRepo;
use module_sync_rust::git::{self, GitClient, VcsClient};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_clone_creates_checkout() -> anyhow::Result<()> {
    let remote = RemoteRepo::new()?;
    let root = TempDir::new()?;

    let client = GitClient;
    client.clone_repo(root.path(), &remote.url(), "foo")?;

    assert!(root.path().join("foo").join(".git").is_dir());
    assert!(root.path().join("foo").join("README.md").is_file());
    Ok(())
}

#[test]
fn test_clone_fails_for_missing_remote() -> anyhow::Result<()> {
    let root = TempDir::new()?;

    let client = GitClient;
    let result = client.clone_repo(root.path(), "/no/such/remote.git", "foo");

    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_clone_rejects_unsafe_module_name() -> anyhow::Result<()> {
    let remote = RemoteRepo::new()?;
    let root = TempDir::new()?;

    let client = GitClient;
    let result = client.clone_repo(root.path(), &remote.url(), "../escape");

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid module name"));
    // Nothing was created inside the root either.
    assert!(std::fs::read_dir(root.path())?.next().is_none());
    Ok(())
}

#[test]
fn test_fetch_and_pull_pick_up_new_commits() -> anyhow::Result<()> {
    let remote = RemoteRepo::new()?;
    let root = TempDir::new()?;

    let client = GitClient;
    client.clone_repo(root.path(), &remote.url(), "foo")?;
    remote.push_commit("CHANGES.md")?;

    client.fetch(root.path(), "foo")?;
    client.pull(root.path(), "foo")?;

    assert!(root.path().join("foo").join("CHANGES.md").is_file());
    Ok(())
}

#[test]
fn test_fetch_and_pull_succeed_when_already_up_to_date() -> anyhow::Result<()> {
    let remote = RemoteRepo::new()?;
    let root = TempDir::new()?;

    let client = GitClient;
    client.clone_repo(root.path(), &remote.url(), "foo")?;

    client.fetch(root.path(), "foo")?;
    client.pull(root.path(), "foo")?;
    Ok(())
}

#[test]
fn test_fetch_fails_outside_a_repository() -> anyhow::Result<()> {
    let root = TempDir::new()?;
    std::fs::create_dir(root.path().join("foo"))?;

    let client = GitClient;
    let result = client.fetch(root.path(), "foo");

    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_run_git_reports_spawn_failure_for_missing_path() {
    let missing_path = PathBuf::from("/no/such/dir/for/test");

    let result = git::run_git(&missing_path, &["status"]);

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to execute git command"));
}
