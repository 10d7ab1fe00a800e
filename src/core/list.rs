//! Branch list generation, ordering and viewport windowing.
//!
//! The list is always rebuilt from the branch records, the current head and
//! the query; entries are never edited in place.

use crate::core::{
    fuzzy::fuzzy_score,
    state::{EntryKind, ListEntry, SessionState},
};

/// Number of entries reachable with Alt+0..9
pub const QUICK_SELECT_SIZE: usize = 10;

/// Rows kept for the search bar and one line of breathing room
const RESERVED_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinesWindow {
    pub top: usize,
    pub bottom: usize,
}

fn score(query: &str, candidate: &str) -> f64 {
    if query.is_empty() {
        1.0
    } else {
        fuzzy_score(query, candidate)
    }
}

/// Build the ranked list for the current query.
///
/// The head entry is always present. The current branch is represented only
/// by the head entry. Branches scoring zero are dropped. With an empty query
/// the head comes first and branches follow by most recent switch; otherwise
/// everything is ordered by score.
pub fn generate_list(state: &SessionState) -> Vec<ListEntry> {
    let query = state.query.as_str();
    let current_branch = state.head.branch_name();

    let head = ListEntry {
        score: score(query, state.head.name()),
        kind: EntryKind::Head(state.head.clone()),
    };

    let branches = state
        .branches
        .iter()
        .filter(|branch| current_branch != Some(branch.name.as_str()))
        .map(|branch| ListEntry {
            score: score(query, &branch.name),
            kind: EntryKind::Branch(branch.clone()),
        })
        .filter(|entry| entry.score > 0.0);

    let mut list: Vec<ListEntry> = std::iter::once(head).chain(branches).collect();

    if query.is_empty() {
        list.sort_by(|a, b| {
            b.is_head()
                .cmp(&a.is_head())
                .then_with(|| b.last_switch().cmp(&a.last_switch()))
        });
    } else {
        list.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    list
}

/// Visible slice of a list of `total` lines that keeps `highlighted` centered
/// without scrolling past either end.
pub fn compute_window(total: usize, highlighted: usize, viewport_rows: usize) -> LinesWindow {
    let size = viewport_rows.saturating_sub(RESERVED_ROWS).max(1) as i64;
    let half = size / 2;

    let top = (highlighted as i64 - half).min(total as i64 - size).max(0);
    let bottom = top + size - 1;

    LinesWindow {
        top: top as usize,
        bottom: bottom as usize,
    }
}

/// The first branch entries, addressable by a single digit
pub fn quick_select_entries(list: &[ListEntry]) -> Vec<&ListEntry> {
    list.iter()
        .filter(|entry| !entry.is_head())
        .take(QUICK_SELECT_SIZE)
        .collect()
}
