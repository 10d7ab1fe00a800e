//! Background check for a newer release.
//!
//! The check runs on its own thread and is never waited for. Whatever has
//! arrived by the time the session ends gets announced; anything later is
//! dropped together with the process.

use crate::core::config::RepositoryConfig;
use crate::core::error::{JumpError, Result};
use semver::Version;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct UpdateCheck {
    receiver: Receiver<String>,
}

impl UpdateCheck {
    /// Start asking the release feed for the latest version
    pub fn spawn(repository: &RepositoryConfig) -> Self {
        let (sender, receiver) = mpsc::channel();
        let repository = repository.clone();

        thread::spawn(move || match latest_release_version(&repository) {
            Ok(version) => {
                log::debug!("Latest released version is {version}");
                // the receiver is gone once the session has ended
                let _ = sender.send(version);
            }
            Err(e) => log::debug!("Update check failed: {e}"),
        });

        Self { receiver }
    }

    /// The latest version if it already arrived and is newer than this build
    pub fn newer_version(&self) -> Option<String> {
        let latest = self.receiver.try_recv().ok()?;

        match needs_update(CURRENT_VERSION, &latest) {
            Ok(true) => Some(latest),
            Ok(false) => None,
            Err(e) => {
                log::debug!("Ignoring release version {latest}: {e}");
                None
            }
        }
    }
}

fn latest_release_version(repository: &RepositoryConfig) -> Result<String> {
    let release = self_update::backends::github::Update::configure()
        .repo_owner(&repository.owner)
        .repo_name(&repository.name)
        .bin_name(&repository.bin_name)
        .current_version(CURRENT_VERSION)
        .build()?
        .get_latest_release()?;

    Ok(release.version)
}

pub fn needs_update(current: &str, latest: &str) -> Result<bool> {
    let current_version = Version::parse(current)
        .map_err(|e| JumpError::config_error(format!("Invalid current version: {e}")))?;
    let latest_version = Version::parse(latest.trim_start_matches('v'))
        .map_err(|e| JumpError::config_error(format!("Invalid latest version: {e}")))?;

    Ok(latest_version > current_version)
}
