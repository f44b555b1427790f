//! Test infrastructure for module-sync integration tests.

use anyhow::Result;
use module_sync_rust::git::run_git;
use std::path::PathBuf;
use tempfile::TempDir;

/// A bare git repository serving as a clone/fetch source for tests.
/// Automatically cleaned up when dropped.
pub struct RemoteRepo {
    _temp_dir: TempDir,
    path: PathBuf,
    seed: PathBuf,
}

impl RemoteRepo {
    /// Creates a bare repository seeded with an initial commit on master.
    /// A scratch clone is kept around for pushing further commits.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        run_git(temp_dir.path(), &["init", "--bare", "-b", "master", "remote.git"])?;
        let path = temp_dir.path().join("remote.git");

        run_git(temp_dir.path(), &["clone", "remote.git", "seed"])?;
        let seed = temp_dir.path().join("seed");

        run_git(&seed, &["config", "user.email", "test@example.com"])?;
        run_git(&seed, &["config", "user.name", "Test User"])?;

        std::fs::write(seed.join("README.md"), "# Test Module\n")?;
        run_git(&seed, &["add", "README.md"])?;
        run_git(&seed, &["commit", "-m", "Initial commit"])?;
        run_git(&seed, &["push", "origin", "master"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
            seed,
        })
    }

    /// Pushes a new commit adding `file` to the remote, for exercising
    /// fetch and pull against checkouts that are behind.
    pub fn push_commit(&self, file: &str) -> Result<()> {
        std::fs::write(self.seed.join(file), "update\n")?;
        run_git(&self.seed, &["add", file])?;
        run_git(&self.seed, &["commit", "-m", "Update"])?;
        run_git(&self.seed, &["push", "origin", "master"])?;
        Ok(())
    }

    /// URL usable as a registry value for this remote.
    pub fn url(&self) -> String {
        self.path.to_str().unwrap().to_string()
    }
}
