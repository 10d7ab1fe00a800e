//! git-jump - interactive git branch switcher.
//!
//! Branches are listed by when they were last switched to, filtered with a
//! fuzzy search as you type, and switched with Enter or a quick-select digit.
//! The actual switch, create, rename and delete all run through the git
//! binary.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Key decoding for raw terminal input
//! - Fuzzy ranking and branch list generation
//! - The per-repository usage store
//! - Git subprocess orchestration
//! - The scene render engine
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    compute_window,
    decode,
    fuzzy_score,
    generate_list,
    parse_keys,
    quick_select_entries,
    strip_ansi_codes,

    // State
    BranchRecord,
    CurrentHead,
    EntryKind,
    // Git operations
    GitCommandResult,
    GitRepo,
    // Error handling
    JumpError,
    Key,
    LinesWindow,
    ListEntry,
    // Rendering
    Renderer,
    Result,
    Scene,
    SessionState,
    // Persistence
    UsageStore,
};
