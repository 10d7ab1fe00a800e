//! Session data structures.
//!
//! # Public API
//! - [`BranchRecord`]: A local branch with its last switch timestamp
//! - [`CurrentHead`]: What the repository has checked out
//! - [`ListEntry`] / [`EntryKind`]: One ranked line of the branch list
//! - [`Scene`]: Which screen the render engine draws
//! - [`SessionState`]: Everything the key handlers mutate

/// A local branch as read from `refs/heads`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub name: String,
    /// Epoch millis of the last switch through git-jump, 0 when never recorded
    pub last_switch: i64,
}

/// The checked-out commit: either a branch or a detached short hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentHead {
    Branch { name: String },
    Detached { sha: String },
}

impl CurrentHead {
    pub fn is_detached(&self) -> bool {
        matches!(self, CurrentHead::Detached { .. })
    }

    /// Branch name when attached, short hash when detached
    pub fn name(&self) -> &str {
        match self {
            CurrentHead::Branch { name } => name,
            CurrentHead::Detached { sha } => sha,
        }
    }

    pub fn branch_name(&self) -> Option<&str> {
        match self {
            CurrentHead::Branch { name } => Some(name),
            CurrentHead::Detached { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Head(CurrentHead),
    Branch(BranchRecord),
}

/// A ranked list line, regenerated from scratch on every query change
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub kind: EntryKind,
    pub score: f64,
}

impl ListEntry {
    pub fn is_head(&self) -> bool {
        matches!(self.kind, EntryKind::Head(_))
    }

    /// The name to hand to `git switch`, or the head's own name
    pub fn target_name(&self) -> &str {
        match &self.kind {
            EntryKind::Head(head) => head.name(),
            EntryKind::Branch(branch) => &branch.name,
        }
    }

    pub fn last_switch(&self) -> i64 {
        match &self.kind {
            EntryKind::Head(_) => 0,
            EntryKind::Branch(branch) => branch.last_switch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    List,
    Message,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub rows: usize,
    pub columns: usize,
    pub highlighted: usize,
    pub branches: Vec<BranchRecord>,
    pub head: CurrentHead,
    pub query: String,
    /// Cursor offset inside `query`, counted in chars
    pub cursor: usize,
    pub list: Vec<ListEntry>,
    pub scene: Scene,
    pub message: Vec<String>,
    pub interactive: bool,
}

impl SessionState {
    pub fn new(head: CurrentHead, branches: Vec<BranchRecord>) -> Self {
        Self {
            rows: 24,
            columns: 80,
            highlighted: 0,
            branches,
            head,
            query: String::new(),
            cursor: 0,
            list: Vec::new(),
            scene: Scene::List,
            message: Vec::new(),
            interactive: true,
        }
    }

    /// Byte offset in `query` of the char offset `cursor`
    pub fn cursor_byte_offset(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor)
            .map_or(self.query.len(), |(offset, _)| offset)
    }

    pub fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    pub fn show_message(&mut self, message: Vec<String>) {
        self.scene = Scene::Message;
        self.message = message;
    }

    pub fn highlighted_entry(&self) -> Option<&ListEntry> {
        self.list.get(self.highlighted)
    }

    pub fn highlight_previous(&mut self) -> bool {
        let previous = self.highlighted.saturating_sub(1);
        let moved = previous != self.highlighted;
        self.highlighted = previous;
        moved
    }

    pub fn highlight_next(&mut self) -> bool {
        let next = (self.highlighted + 1).min(self.list.len().saturating_sub(1));
        let moved = next != self.highlighted;
        self.highlighted = next;
        moved
    }

    // Query editing. Every method reports whether the query text changed;
    // cursor-only moves report whether the cursor moved.

    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let offset = self.cursor_byte_offset();
        self.query.insert_str(offset, text);
        self.cursor += text.chars().count();
        true
    }

    /// Remove the char before the cursor
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_chars(self.cursor, self.cursor + 1)
    }

    /// Remove the char under the cursor
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.query_len() {
            return false;
        }
        self.remove_chars(self.cursor, self.cursor + 1)
    }

    pub fn delete_word_backward(&mut self) -> bool {
        let start = self.previous_word_start();
        let end = self.cursor;
        self.cursor = start;
        self.remove_chars(start, end)
    }

    pub fn clear_query(&mut self) -> bool {
        self.cursor = 0;
        let changed = !self.query.is_empty();
        self.query.clear();
        changed
    }

    pub fn kill_to_end(&mut self) -> bool {
        let end = self.query_len();
        self.remove_chars(self.cursor, end)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_cursor_to(self.cursor.saturating_sub(1))
    }

    pub fn move_right(&mut self) -> bool {
        self.move_cursor_to((self.cursor + 1).min(self.query_len()))
    }

    pub fn move_home(&mut self) -> bool {
        self.move_cursor_to(0)
    }

    pub fn move_end(&mut self) -> bool {
        self.move_cursor_to(self.query_len())
    }

    pub fn move_word_left(&mut self) -> bool {
        self.move_cursor_to(self.previous_word_start())
    }

    pub fn move_word_right(&mut self) -> bool {
        self.move_cursor_to(self.next_word_end())
    }

    fn move_cursor_to(&mut self, position: usize) -> bool {
        let moved = position != self.cursor;
        self.cursor = position;
        moved
    }

    fn remove_chars(&mut self, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        self.query = self
            .query
            .chars()
            .enumerate()
            .filter(|(index, _)| *index < start || *index >= end)
            .map(|(_, ch)| ch)
            .collect();
        true
    }

    /// Skip separators left of the cursor, then the word before them
    fn previous_word_start(&self) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut position = self.cursor.min(chars.len());

        while position > 0 && !is_word_char(chars[position - 1]) {
            position -= 1;
        }
        while position > 0 && is_word_char(chars[position - 1]) {
            position -= 1;
        }
        position
    }

    fn next_word_end(&self) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut position = self.cursor.min(chars.len());

        while position < chars.len() && !is_word_char(chars[position]) {
            position += 1;
        }
        while position < chars.len() && is_word_char(chars[position]) {
            position += 1;
        }
        position
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}
