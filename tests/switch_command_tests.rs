use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod switch_command_tests {
    use super::*;

    #[test]
    fn test_switch_to_existing_branch() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .arg("develop")
            .assert()
            .success()
            .stdout(assertions::git_command_line("switch develop"));

        assert_eq!(current_branch(repo.path())?, "develop");
        assert!(repo.usage()?["develop"].last_switch > 0);

        Ok(())
    }

    #[test]
    fn test_fuzzy_fallback_switches_to_best_match() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .arg("sign")
            .assert()
            .success()
            .stdout(assertions::git_command_line("switch feature/signup"));

        assert_eq!(current_branch(repo.path())?, "feature/signup");

        let usage = repo.usage()?;
        assert!(usage.contains_key("feature/signup"));
        assert!(!usage.contains_key("sign"));

        Ok(())
    }

    #[test]
    fn test_no_match_leaves_everything_untouched() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .arg("qqq")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("qqq does not match any branch"));

        assert_eq!(current_branch(repo.path())?, "main");
        assert!(repo.usage()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_fuzzy_match_on_current_branch_stays() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_branches(repo.path(), &["develop"])?;

        jump_command(repo.path())?
            .arg("mai")
            .assert()
            .success()
            .stdout(predicate::str::contains("Staying on main"));

        assert!(repo.usage()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_switch_with_options_is_not_recorded() -> anyhow::Result<()> {
        let repo = create_multi_branch_repo()?;

        jump_command(repo.path())?
            .args(["--detach", "hotfix"])
            .assert()
            .success();

        assert_eq!(current_branch(repo.path())?, "");
        assert!(repo.usage()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_not_in_git_repo() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;

        // skip when the temp folder itself lives inside a repository
        if git(temp_dir.path(), &["rev-parse", "--git-dir"]).is_ok() {
            return Ok(());
        }

        jump_command(temp_dir.path())?
            .arg("--list")
            .assert()
            .code(1)
            .stdout(assertions::not_in_git_repo());

        Ok(())
    }
}
