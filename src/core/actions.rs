//! Branch-mutating git actions.
//!
//! Each action invokes git, and only when git exits with 0 brings the usage
//! store in line with what git did. The returned [`GitCommandResult`] carries
//! the message block the session shows and the status the process exits with.

use crate::core::{
    error::Result,
    git::{GitCommandResult, GitRepo},
    store::UsageStore,
};

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn is_option(argument: &str) -> bool {
    argument.starts_with('-')
}

/// `git switch <args>`. The switch is recorded only when the arguments are a
/// single branch name.
pub fn switch_branch(repo: &GitRepo, store: &UsageStore, args: &[String]) -> Result<GitCommandResult> {
    let result = repo.run("switch", args)?;

    let branch_name = match args {
        [name] if !is_option(name) => Some(name.as_str()),
        _ => None,
    };

    if let (true, Some(name)) = (result.success(), branch_name) {
        store.record_switch(name, now_millis())?;
    }

    Ok(result)
}

/// `git switch --create <args>`, recording the first argument as the new branch
pub fn create_branch(repo: &GitRepo, store: &UsageStore, args: &[String]) -> Result<GitCommandResult> {
    let mut switch_args = vec!["--create".to_string()];
    switch_args.extend_from_slice(args);

    let result = repo.run("switch", &switch_args)?;

    if let (true, Some(name)) = (result.success(), args.first()) {
        store.record_switch(name, now_millis())?;
    }

    Ok(result)
}

/// `git branch --move <old> <new>`
pub fn rename_branch(
    repo: &GitRepo,
    store: &UsageStore,
    old_name: &str,
    new_name: &str,
) -> Result<GitCommandResult> {
    let args = ["--move".to_string(), old_name.to_string(), new_name.to_string()];
    let mut result = repo.run("branch", &args)?;

    if result.success() {
        store.rename(old_name, new_name)?;
        result.message.push("Renamed.".to_string());
    }

    Ok(result)
}

/// `git branch --delete <names...>`
pub fn delete_branches(repo: &GitRepo, store: &UsageStore, names: &[String]) -> Result<GitCommandResult> {
    let mut args = vec!["--delete".to_string()];
    args.extend_from_slice(names);

    let result = repo.run("branch", &args)?;

    if result.success() {
        store.remove(names)?;
    }

    Ok(result)
}
