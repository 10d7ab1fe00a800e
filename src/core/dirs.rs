use crate::core::error::{JumpError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "git-jump";

/// Per-user config folder: `$XDG_CONFIG_HOME/git-jump` (or `~/.config`) on
/// Unix, `~/Library/Application Support/git-jump` on macOS.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join(APP_DIR))
        .ok_or_else(|| JumpError::config_error("Could not determine the home directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_directory_is_app_specific() {
        if let Ok(dir) = get_config_directory() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
