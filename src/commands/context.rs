//! Shared setup for every command that works on a repository.
//!
//! # Initialization Steps
//! 1. **Repository**: walk up from the working directory to the enclosing repository
//! 2. **Usage store**: create `.jump/data.json` on first use
//! 3. **Branches**: read `refs/heads`, reconcile the store and pair timestamps
//! 4. **List**: rank the branches for an empty query
//! 5. **Terminal**: geometry and whether stdout is a terminal

use crate::core::{
    error::Result,
    git::GitRepo,
    list::generate_list,
    state::SessionState,
    store::UsageStore,
};
use std::env;
use std::io::IsTerminal;

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;

pub struct JumpContext {
    pub repo: GitRepo,
    pub store: UsageStore,
    pub state: SessionState,
}

impl JumpContext {
    /// Initialize from the current working directory
    pub fn initialize() -> Result<Self> {
        let current_dir = env::current_dir()?;
        let repo = GitRepo::discover(&current_dir)?;
        Self::from_repo(repo)
    }

    pub fn from_repo(repo: GitRepo) -> Result<Self> {
        let store = UsageStore::new(repo.root());
        store.ensure_initialized()?;

        let head = repo.current_head()?;
        let branches = store.branch_records(repo.branch_names()?)?;
        log::debug!("Loaded {} branches, head is {}", branches.len(), head.name());

        let mut state = SessionState::new(head, branches);
        let (rows, columns) = terminal_size();
        state.rows = rows;
        state.columns = columns;
        state.interactive = std::io::stdout().is_terminal();
        state.list = generate_list(&state);

        Ok(Self { repo, store, state })
    }

    /// Replace the query and rebuild the list for it
    pub fn search(&mut self, query: &str) {
        self.state.query = query.to_string();
        self.state.cursor = self.state.query_len();
        self.state.list = generate_list(&self.state);
        self.state.highlighted = 0;
    }
}

/// Terminal rows and columns, 24x80 when there is no terminal
pub fn terminal_size() -> (usize, usize) {
    let (columns, rows) = crossterm::terminal::size()
        .ok()
        .filter(|(columns, rows)| *columns > 0 && *rows > 0)
        .unwrap_or((DEFAULT_COLUMNS, DEFAULT_ROWS));
    (rows as usize, columns as usize)
}
