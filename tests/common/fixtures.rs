//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use git_jump::core::store::{BranchUsage, UsageMap};

/// Repository with a few branches, `main` checked out
pub fn create_multi_branch_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_branches(&repo.path, &["develop", "feature/login", "feature/signup", "hotfix"])?;
    Ok(repo)
}

/// Same branches with recorded switches: hotfix most recent, then develop
pub fn create_repo_with_history() -> anyhow::Result<TestRepo> {
    let repo = create_multi_branch_repo()?;
    let store = repo.store();
    store.ensure_initialized()?;

    let usage: UsageMap = [("develop", 100), ("hotfix", 300), ("deleted-long-ago", 200)]
        .into_iter()
        .map(|(name, last_switch)| {
            (
                name.to_string(),
                BranchUsage {
                    name: name.to_string(),
                    last_switch,
                },
            )
        })
        .collect();
    store.write(&usage)?;

    Ok(repo)
}
