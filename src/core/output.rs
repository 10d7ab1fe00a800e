//! Message blocks shown in the message scene.
//!
//! # Format
//! Input errors are a single line: yellow title, then the explanation.
//! Any other error gets the bug-report block:
//! ```text
//! Error: <message>
//!
//! What to do?
//! <call to action>
//!
//! GitHub Issues: <url>
//! ```

use crate::core::{
    colors::{bold, green, red, yellow},
    config::RepositoryConfig,
    error::JumpError,
};

pub fn error_message(error: &JumpError, repository: &RepositoryConfig) -> Vec<String> {
    if let Some((title, message)) = error.input_parts() {
        return vec![format!("{} {message}", yellow(title))];
    }

    vec![
        format!("{} {error}", red("Error:")),
        String::new(),
        bold("What to do?"),
        "Help improve git-jump, create GitHub issue with this error and steps to reproduce it. Thank you!"
            .to_string(),
        String::new(),
        format!("GitHub Issues: {}", repository.issues_url()),
    ]
}

pub fn staying_on_message(name: &str) -> Vec<String> {
    vec![format!("Staying on {}", bold(name))]
}

pub fn no_match_message(query: &str) -> Vec<String> {
    vec![format!("{} does not match any branch", bold(&yellow(query)))]
}

/// Lines appended to the final message when a newer release exists
pub fn update_available_message(current: &str, latest: &str, repository: &RepositoryConfig) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "New version of git-jump is available: {} → {}.",
            yellow(current),
            green(latest)
        ),
        format!("Changelog: {}", repository.release_url(latest)),
        String::new(),
        format!(
            "Download it from {} to update.",
            bold(&format!(
                "https://github.com/{}/{}/releases",
                repository.owner, repository.name
            ))
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colors::strip_ansi_codes;

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines.iter().map(|line| strip_ansi_codes(line)).collect()
    }

    #[test]
    fn test_input_error_is_one_line() {
        let error = JumpError::input("Wrong Format.", "Two names are required.");
        let lines = plain(error_message(&error, &RepositoryConfig::default()));
        assert_eq!(lines, vec!["Wrong Format. Two names are required."]);
    }

    #[test]
    fn test_not_in_repo_is_input_error() {
        let lines = plain(error_message(&JumpError::NotInGitRepo, &RepositoryConfig::default()));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("You're not in Git repo."));
    }

    #[test]
    fn test_fatal_error_block() {
        let error = JumpError::config_error("broken");
        let lines = plain(error_message(&error, &RepositoryConfig::default()));

        assert_eq!(lines[0], "Error: Configuration error: broken");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "What to do?");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("GitHub Issues: https://github.com/mykolaharmash/git-jump/issues")
        );
    }

    #[test]
    fn test_simple_messages() {
        assert_eq!(plain(staying_on_message("main")), vec!["Staying on main"]);
        assert_eq!(
            plain(no_match_message("xyz")),
            vec!["xyz does not match any branch"]
        );
    }

    #[test]
    fn test_update_available_message() {
        let lines = plain(update_available_message(
            "0.1.0",
            "0.2.0",
            &RepositoryConfig::default(),
        ));
        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "New version of git-jump is available: 0.1.0 → 0.2.0."
        );
        assert!(lines[2].ends_with("/releases/tag/v0.2.0"));
    }
}
