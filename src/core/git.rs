//! Repository access and git subprocess execution.
//!
//! [`GitRepo`] locates the enclosing repository, reads the checked-out head,
//! enumerates local branches from `refs/heads` and runs git sub-commands.
//! Branch mutations always go through the git binary so that hooks, config
//! and messages behave exactly like the user's own git.
//!
//! # Public API
//! - [`GitRepo`]: Handle on the repository the tool was started in
//! - [`GitCommandResult`]: Exit status, raw streams and the formatted message block
//! - [`locate_repo_root`] / [`collect_branch_names`]: Filesystem walks

use crate::core::{
    colors::{dim, status_indicator},
    error::{JumpError, Result},
    state::CurrentHead,
};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const GIT_DIR: &str = ".git";
const SHORT_SHA_LEN: usize = 7;

/// Outcome of one git invocation. A nonzero `status` is a normal result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommandResult {
    pub status: i32,
    /// Status indicator and command line, then the non-blank stdout and stderr lines
    pub message: Vec<String>,
    pub stdout: String,
    pub stderr: String,
}

impl GitCommandResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

pub struct GitRepo {
    root: PathBuf,
    repo: Repository,
}

impl GitRepo {
    /// Open the repository enclosing `start`
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let root = locate_repo_root(start.as_ref())?;
        log::debug!("Found repository at {}", root.display());
        Self::open(root)
    }

    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let repo = Repository::open(&root)?;
        Ok(GitRepo { root, repo })
    }

    /// Working tree root, the folder holding `.git`
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_head(&self) -> Result<CurrentHead> {
        // Read HEAD unresolved so that an unborn branch still reports its name
        let head = self.repo.find_reference("HEAD")?;

        if let Some(target) = head.symbolic_target() {
            let name = target.strip_prefix("refs/heads/").unwrap_or(target);
            return Ok(CurrentHead::Branch {
                name: name.to_string(),
            });
        }

        let oid = head
            .target()
            .ok_or_else(|| git2::Error::from_str("HEAD points to nothing"))?;

        Ok(CurrentHead::Detached {
            sha: oid.to_string().chars().take(SHORT_SHA_LEN).collect(),
        })
    }

    /// Names of all local branches with loose refs, sorted
    pub fn branch_names(&self) -> Result<Vec<String>> {
        collect_branch_names(&self.repo.path().join("refs").join("heads"))
    }

    /// Run `git <command> <args...>` in the working tree and wait for it
    pub fn run(&self, command: &str, args: &[String]) -> Result<GitCommandResult> {
        let command_line = std::iter::once("git")
            .chain(std::iter::once(command))
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        log::debug!("Running {command_line}");

        let output = Command::new("git")
            .arg(command)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| JumpError::subprocess_launch(&command_line, e))?;

        // Killed by a signal: no exit code, report as a plain failure
        let status = output.status.code().unwrap_or(1);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        log::debug!("{command_line} exited with {status}");

        let mut message = vec![format!("{}{}", status_indicator(status), dim(&command_line))];
        message.extend(clean_lines(&stdout));
        message.extend(clean_lines(&stderr));

        Ok(GitCommandResult {
            status,
            message,
            stdout,
            stderr,
        })
    }
}

fn clean_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.trim()
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Walk up from `start` until a folder containing a `.git` directory is found
pub fn locate_repo_root(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);

    while let Some(folder) = current {
        if folder.join(GIT_DIR).is_dir() {
            return Ok(folder.to_path_buf());
        }
        current = folder.parent();
    }

    Err(JumpError::NotInGitRepo)
}

/// Every file under `heads_dir` is a branch; nested folders are name segments
/// joined with `/`.
pub fn collect_branch_names(heads_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut pending = vec![(heads_dir.to_path_buf(), String::new())];

    while let Some((folder, prefix)) = pending.pop() {
        let entries = match fs::read_dir(&folder) {
            Ok(entries) => entries,
            // a fresh repository may not have refs/heads yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if file_type.is_dir() {
                pending.push((entry.path(), format!("{prefix}{name}/")));
            } else if file_type.is_file() {
                names.push(format!("{prefix}{name}"));
            }
        }
    }

    names.sort();
    Ok(names)
}
