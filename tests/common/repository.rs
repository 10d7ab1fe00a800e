//! Git repository management and setup utilities

#![allow(dead_code)]

use git_jump::core::store::UsageMap;
use git_jump::core::UsageStore;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary repository. The TempDir must be kept alive for the duration of
/// the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> UsageStore {
        UsageStore::new(&self.path)
    }

    pub fn usage(&self) -> anyhow::Result<UsageMap> {
        Ok(self.store().read()?)
    }
}

/// Run git in `repo_path` and fail on a nonzero exit
pub fn git(repo_path: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).current_dir(repo_path).output()?;

    anyhow::ensure!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Fresh repository on `main` with one empty commit
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["commit", "--allow-empty", "-m", "Initial commit"])?;

    Ok(TestRepo { temp_dir, path })
}

pub fn create_branches(repo_path: &Path, names: &[&str]) -> anyhow::Result<()> {
    for name in names {
        git(repo_path, &["branch", name])?;
    }
    Ok(())
}

pub fn current_branch(repo_path: &Path) -> anyhow::Result<String> {
    git(repo_path, &["branch", "--show-current"])
}

pub fn branch_exists(repo_path: &Path, name: &str) -> bool {
    git(repo_path, &["rev-parse", "--verify", "--quiet", &format!("refs/heads/{name}")]).is_ok()
}

/// The binary, run in `repo_path` with colors, user config and the update
/// check out of the way
pub fn jump_command(repo_path: &Path) -> anyhow::Result<Command> {
    use assert_cmd::prelude::*;

    let mut cmd = Command::cargo_bin("git-jump")?;
    cmd.current_dir(repo_path)
        .env("NO_COLOR", "1")
        .env("GIT_JUMP_NO_UPDATE_CHECK", "1")
        .env("XDG_CONFIG_HOME", repo_path.join(".test-config"));
    Ok(cmd)
}
