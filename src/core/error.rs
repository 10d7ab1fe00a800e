//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`JumpError`], the single error type shared by the engine
//! and the commands. It uses `thiserror` for the definitions and provides small
//! constructors for the variants that carry context.
//!
//! # Public API
//! - [`JumpError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, JumpError>`
//!
//! # Error Categories
//! - **Input**: unknown sub-command, missing arguments, not in a repository.
//!   Reported as a short titled message.
//! - **Store**: the usage store could not be read, parsed or written.
//! - **Subprocess**: the git executable could not be started at all. A git
//!   process that runs and exits nonzero is *not* an error.
//! - **Everything else**: I/O, git2, config, update check.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-jump
#[derive(Error, Debug)]
pub enum JumpError {
    // User input errors
    #[error("{title} {message}")]
    Input { title: String, message: String },

    #[error("You're not in Git repo. There is no Git repository in current or any parent folder.")]
    NotInGitRepo,

    // Usage store errors
    #[error("JSON in \"{path}\" is not valid, could not parse it.")]
    StoreCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not read \"{path}\": {source}")]
    StoreReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write data into \"{path}\".")]
    StoreWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Subprocess errors
    #[error("Could not run {command}.")]
    SubprocessLaunch {
        command: String,
        source: std::io::Error,
    },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Update check failed: {0}")]
    UpdateCheck(#[from] self_update::errors::Error),
}

/// Convenience type alias for Results using JumpError
pub type Result<T> = std::result::Result<T, JumpError>;

impl JumpError {
    /// Create a user input error with a title and explanation
    pub fn input(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn store_corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StoreCorrupt {
            path: path.into(),
            source,
        }
    }

    pub fn store_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn store_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn subprocess_launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SubprocessLaunch {
            command: command.into(),
            source,
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Errors caused by what the user typed or where they ran the tool.
    /// These get a short titled message instead of the bug-report block.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::NotInGitRepo)
    }

    /// Title and body for the short input-error rendering
    pub fn input_parts(&self) -> Option<(&str, &str)> {
        match self {
            Self::Input { title, message } => Some((title, message)),
            Self::NotInGitRepo => Some((
                "You're not in Git repo.",
                "There is no Git repository in current or any parent folder.",
            )),
            _ => None,
        }
    }
}
