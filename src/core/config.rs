//! Optional user configuration.
//!
//! Read from `<config dir>/git-jump/config.json`. Every field has a default,
//! so a missing file or a partial one is fine. The tool never writes it.

use crate::core::dirs::get_config_directory;
use crate::core::error::{JumpError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";
/// Set to any value to skip the update check
pub const NO_UPDATE_CHECK_ENV: &str = "GIT_JUMP_NO_UPDATE_CHECK";

/// GitHub coordinates of the release feed
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryConfig {
    pub owner: String,
    pub name: String,
    pub bin_name: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: "mykolaharmash".to_string(),
            name: "git-jump".to_string(),
            bin_name: "git-jump".to_string(),
        }
    }
}

impl RepositoryConfig {
    pub fn issues_url(&self) -> String {
        format!("https://github.com/{}/{}/issues", self.owner, self.name)
    }

    pub fn release_url(&self, version: &str) -> String {
        format!(
            "https://github.com/{}/{}/releases/tag/v{version}",
            self.owner, self.name
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub check_updates: bool,
    pub repository: RepositoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_updates: true,
            repository: RepositoryConfig::default(),
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match get_config_directory() {
            Ok(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            Err(e) => {
                log::debug!("No config directory, using defaults: {e}");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse config '{}': {}", path.display(), e);
            JumpError::config_error(format!("{} is not valid: {e}", path.display()))
        })
    }

    pub fn update_check_enabled(&self) -> bool {
        self.check_updates && std::env::var_os(NO_UPDATE_CHECK_ENV).is_none()
    }
}
