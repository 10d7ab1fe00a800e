use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod branch_command_tests {
    use super::*;

    #[test]
    fn test_new_creates_and_records_branch() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .args(["new", "feature/search"])
            .assert()
            .success()
            .stdout(assertions::git_command_line("switch --create feature/search"));

        assert_eq!(current_branch(repo.path())?, "feature/search");
        assert!(repo.usage()?["feature/search"].last_switch > 0);

        Ok(())
    }

    #[test]
    fn test_new_existing_branch_mirrors_git_status() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        let output = jump_command(repo.path())?
            .args(["new", "develop"])
            .output()?;

        // git exits with 128 on fatal errors, the exit status is git's
        assert_eq!(output.status.code(), Some(128));
        assert_eq!(current_branch(repo.path())?, "main");
        assert!(repo.usage()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_rename_moves_history() -> anyhow::Result<()> {
        let repo = create_repo_with_history()?;

        jump_command(repo.path())?
            .args(["rename", "develop", "development"])
            .assert()
            .success()
            .stdout(assertions::git_command_line("branch --move develop development"))
            .stdout(predicate::str::contains("Renamed."));

        assert!(branch_exists(repo.path(), "development"));
        let usage = repo.usage()?;
        assert!(!usage.contains_key("develop"));
        assert_eq!(usage["development"].last_switch, 100);

        Ok(())
    }

    #[test]
    fn test_rename_needs_two_names() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .args(["rename", "develop"])
            .assert()
            .code(1)
            .stdout(assertions::wrong_format());

        assert!(branch_exists(repo.path(), "develop"));
        Ok(())
    }

    #[test]
    fn test_delete_removes_history() -> anyhow::Result<()> {
        let repo = create_repo_with_history()?;

        jump_command(repo.path())?
            .args(["delete", "hotfix", "develop"])
            .assert()
            .success()
            .stdout(assertions::git_command_line("branch --delete hotfix develop"));

        assert!(!branch_exists(repo.path(), "hotfix"));
        let usage = repo.usage()?;
        assert!(!usage.contains_key("hotfix"));
        assert!(!usage.contains_key("develop"));

        Ok(())
    }

    #[test]
    fn test_delete_current_branch_fails() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .args(["delete", "main"])
            .assert()
            .failure();

        assert!(branch_exists(repo.path(), "main"));
        Ok(())
    }

    #[test]
    fn test_lone_sub_command_word_is_a_branch_name() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_branches(repo.path(), &["new"])?;

        jump_command(repo.path())?.arg("new").assert().success();

        assert_eq!(current_branch(repo.path())?, "new");
        Ok(())
    }
}
