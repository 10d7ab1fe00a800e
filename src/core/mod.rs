//! Core functionality for git-jump.
//!
//! This module holds the branch-switching engine: key decoding, fuzzy
//! ranking, list generation, the usage store, git orchestration and the
//! render engine, plus the error, config and update-check plumbing.

pub mod actions;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod fuzzy;
pub mod git;
pub mod keys;
pub mod list;
pub mod output;
pub mod render;
pub mod state;
pub mod store;
pub mod templates;
pub mod update;
pub mod views;

// === Error handling ===
pub use error::{JumpError, Result};

// === Input ===
// Raw terminal bytes -> key tokens -> logical keys
pub use keys::{decode, parse_keys, Key};

// === Ranking and list ===
pub use fuzzy::fuzzy_score;
pub use list::{compute_window, generate_list, quick_select_entries, LinesWindow};

// === State ===
pub use state::{BranchRecord, CurrentHead, EntryKind, ListEntry, Scene, SessionState};

// === Repository and persistence ===
pub use git::{GitCommandResult, GitRepo};
pub use store::{BranchUsage, UsageMap, UsageStore};

// === Rendering ===
pub use colors::strip_ansi_codes;
pub use render::{RenderState, Renderer};

// === Config and updates ===
pub use config::{Config, RepositoryConfig};
pub use update::UpdateCheck;
