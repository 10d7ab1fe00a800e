//! Persistent per-repository record of when each branch was last switched to.
//!
//! The store is a single pretty-printed JSON object in `<repo>/.jump/data.json`
//! mapping branch name to `{ "name": ..., "lastSwitch": <epoch millis> }`.
//! Every operation reads and rewrites the whole file. Concurrent git-jump
//! processes on one repository are not coordinated: the last writer wins.
//!
//! # Public API
//! - [`UsageStore`]: Read, write and update the store of one repository
//! - [`BranchUsage`] / [`UsageMap`]: The stored records

use crate::core::{
    error::{JumpError, Result},
    state::BranchRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const JUMP_FOLDER: &str = ".jump";
pub const DATA_FILE: &str = "data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchUsage {
    pub name: String,
    pub last_switch: i64,
}

pub type UsageMap = BTreeMap<String, BranchUsage>;

#[derive(Debug, Clone)]
pub struct UsageStore {
    repo_root: PathBuf,
}

impl UsageStore {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn folder(&self) -> PathBuf {
        self.repo_root.join(JUMP_FOLDER)
    }

    pub fn data_file(&self) -> PathBuf {
        self.folder().join(DATA_FILE)
    }

    /// Create the store folder and an empty store on first use, and keep the
    /// folder out of version control through `.git/info/exclude`.
    pub fn ensure_initialized(&self) -> Result<()> {
        let folder = self.folder();

        if !folder.exists() {
            log::debug!("Creating usage store folder {}", folder.display());
            fs::create_dir_all(&folder)
                .map_err(|e| JumpError::store_write_failed(&folder, e))?;
            self.exclude_from_git()?;
        }

        let data_file = self.data_file();
        if !data_file.exists() {
            fs::write(&data_file, "{}").map_err(|e| JumpError::store_write_failed(&data_file, e))?;
        }

        Ok(())
    }

    fn exclude_from_git(&self) -> Result<()> {
        let exclude = self.repo_root.join(".git").join("info").join("exclude");

        if let Some(info_dir) = exclude.parent() {
            fs::create_dir_all(info_dir)
                .map_err(|e| JumpError::store_write_failed(info_dir, e))?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&exclude)
            .map_err(|e| JumpError::store_write_failed(&exclude, e))?;
        write!(file, "\n{JUMP_FOLDER}").map_err(|e| JumpError::store_write_failed(&exclude, e))?;

        Ok(())
    }

    pub fn read(&self) -> Result<UsageMap> {
        let path = self.data_file();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Usage store {} does not exist yet", path.display());
                return Ok(UsageMap::new());
            }
            Err(e) => {
                log::error!("Failed to read usage store '{}': {}", path.display(), e);
                return Err(JumpError::store_read_failed(&path, e));
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse usage store '{}': {}", path.display(), e);
            JumpError::store_corrupt(&path, e)
        })
    }

    pub fn write(&self, usage: &UsageMap) -> Result<()> {
        let path = self.data_file();
        let json = serde_json::to_string_pretty(usage)?;

        fs::write(&path, json).map_err(|e| {
            log::error!("Failed to write usage store '{}': {}", path.display(), e);
            JumpError::store_write_failed(&path, e)
        })?;

        log::debug!("Saved {} usage records", usage.len());
        Ok(())
    }

    /// Drop records of branches that no longer exist and persist the result
    pub fn reconcile(&self, live_branches: &[String]) -> Result<UsageMap> {
        let usage = self.read()?;
        let before = usage.len();

        let cleaned: UsageMap = usage
            .into_iter()
            .filter(|(name, _)| live_branches.iter().any(|live| live == name))
            .collect();

        if cleaned.len() != before {
            log::debug!(
                "Dropped {} usage records of deleted branches",
                before - cleaned.len()
            );
        }

        self.write(&cleaned)?;
        Ok(cleaned)
    }

    /// Reconcile against the live branches and pair each with its timestamp
    pub fn branch_records(&self, live_branches: Vec<String>) -> Result<Vec<BranchRecord>> {
        let usage = self.reconcile(&live_branches)?;

        Ok(live_branches
            .into_iter()
            .map(|name| {
                let last_switch = usage.get(&name).map_or(0, |record| record.last_switch);
                BranchRecord { name, last_switch }
            })
            .collect())
    }

    pub fn record_switch(&self, name: &str, at_millis: i64) -> Result<()> {
        let mut usage = self.read()?;

        usage.insert(
            name.to_string(),
            BranchUsage {
                name: name.to_string(),
                last_switch: at_millis,
            },
        );

        self.write(&usage)
    }

    /// Move the record of `old_name` under `new_name`. Untracked branches
    /// leave the store untouched.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        let mut usage = self.read()?;

        let Some(record) = usage.remove(old_name) else {
            return Ok(());
        };

        usage.insert(
            new_name.to_string(),
            BranchUsage {
                name: new_name.to_string(),
                ..record
            },
        );

        self.write(&usage)
    }

    pub fn remove(&self, names: &[String]) -> Result<()> {
        let mut usage = self.read()?;

        for name in names {
            usage.remove(name);
        }

        self.write(&usage)
    }
}
