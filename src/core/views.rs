//! Line builders for the two scenes.
//!
//! Everything here is a pure function of the session state: it returns the
//! lines to paint and leaves cursor handling to the render engine.

use crate::core::{
    colors::{bold, dim, display_width, highlight, pad_end, pad_start, strip_ansi_codes, truncate},
    list::{compute_window, quick_select_entries, LinesWindow},
    state::{BranchRecord, CurrentHead, EntryKind, SessionState},
};

/// Left column holding the quick-select digit
pub const INDEX_PADDING: &str = "   ";
const INDEX_COLUMN_WIDTH: usize = 3;
const MORE_INDICATOR_WIDTH: usize = 5;
const MORE_INDICATOR: &str = "   ↓ ";
const SEARCH_PLACEHOLDER: &str = "Search";
const HINT_MIN_WIDTH: usize = 25;
const DETACHED_SUFFIX: &str = "(detached)";
/// Left margin of the message scene
pub const MESSAGE_MARGIN: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    name_width: usize,
    /// Room for the head line, which is never padded
    head_width: usize,
    /// Spacing after the name plus the more-indicator column
    indicator_width: usize,
}

fn calculate_layout(state: &SessionState) -> Layout {
    let longest_name = state
        .branches
        .iter()
        .map(|branch| display_width(&branch.name))
        .max()
        .unwrap_or(0);

    let head_width = state
        .columns
        .saturating_sub(INDEX_COLUMN_WIDTH + MORE_INDICATOR_WIDTH);
    let name_width = head_width.min(longest_name);

    Layout {
        name_width,
        head_width,
        indicator_width: state.columns.saturating_sub(INDEX_COLUMN_WIDTH + name_width),
    }
}

pub fn quick_select_modifier() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌥"
    } else {
        "Alt"
    }
}

fn view_head_name(head: &CurrentHead, width: usize) -> String {
    let suffix_width = DETACHED_SUFFIX.len() + 1;
    if !head.is_detached() || width <= suffix_width {
        return bold(&truncate(head.name(), width));
    }

    format!(
        "{} {}",
        bold(&truncate(head.name(), width - suffix_width)),
        dim(DETACHED_SUFFIX)
    )
}

fn view_branch(branch: &BranchRecord, quick_index: usize, layout: &Layout) -> String {
    let index = if quick_index < 10 {
        format!(" {} ", dim(&quick_index.to_string()))
    } else {
        INDEX_PADDING.to_string()
    };

    format!(
        "{index}{}",
        pad_end(&truncate(&branch.name, layout.name_width), layout.name_width)
    )
}

fn view_list_lines(state: &SessionState, layout: &Layout) -> Vec<String> {
    let mut quick_index = 0;

    state
        .list
        .iter()
        .map(|entry| match &entry.kind {
            EntryKind::Head(head) => {
                format!("{INDEX_PADDING}{}", view_head_name(head, layout.head_width))
            }
            EntryKind::Branch(branch) => {
                let line = view_branch(branch, quick_index, layout);
                quick_index += 1;
                line
            }
        })
        .collect()
}

fn add_scroll_indicator(line: String, index: usize, total: usize, window: &LinesWindow, layout: &Layout) -> String {
    if index == window.bottom && window.bottom < total.saturating_sub(1) {
        return format!("{line}{}", dim(&pad_start(MORE_INDICATOR, layout.indicator_width)));
    }
    line
}

/// Windowed branch lines with the highlighted one colored
pub fn view_list(state: &SessionState) -> Vec<String> {
    let layout = calculate_layout(state);
    let total = state.list.len();
    let window = compute_window(total, state.highlighted, state.rows);

    view_list_lines(state, &layout)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let line = if index == state.highlighted {
                // nested SGR resets would cut the highlight short
                highlight(&strip_ansi_codes(&line))
            } else {
                line
            };
            add_scroll_indicator(line, index, total, &window, &layout)
        })
        .skip(window.top)
        .take(window.bottom + 1 - window.top)
        .collect()
}

fn view_quick_select_hint(max_index: usize, width: usize) -> String {
    let trailing = if max_index > 0 {
        format!("..{max_index}")
    } else {
        String::new()
    };

    dim(&pad_start(
        &format!("{}+0{trailing} quick select ", quick_select_modifier()),
        width,
    ))
}

fn search_width(state: &SessionState) -> usize {
    state
        .columns
        .saturating_sub(INDEX_PADDING.len())
        .min(display_width(&state.query).max(SEARCH_PLACEHOLDER.len()))
}

pub fn view_search_line(state: &SessionState) -> String {
    let width = search_width(state);

    let search = if state.query.is_empty() {
        dim(&pad_end(SEARCH_PLACEHOLDER, width))
    } else {
        pad_end(&truncate(&state.query, width), width)
    };

    let line = format!("{INDEX_PADDING}{search}");
    let hint_width = state.columns.saturating_sub(INDEX_PADDING.len() + width);

    if hint_width < HINT_MIN_WIDTH {
        return line;
    }

    let quick = quick_select_entries(&state.list);
    if quick.is_empty() {
        return line;
    }

    format!("{line}{}", view_quick_select_hint(quick.len() - 1, hint_width))
}

/// Search bar followed by the visible part of the list
pub fn view_list_scene(state: &SessionState) -> Vec<String> {
    std::iter::once(view_search_line(state))
        .chain(view_list(state))
        .collect()
}

/// Screen column (1-based) of the search bar's text cursor
pub fn search_cursor_column(state: &SessionState) -> usize {
    let before_cursor = &state.query[..state.cursor_byte_offset()];
    INDEX_PADDING.len() + display_width(before_cursor) + 1
}

/// One name per line and a trailing empty line, for pipes and `--list`
pub fn view_non_interactive_list(state: &SessionState) -> Vec<String> {
    state
        .list
        .iter()
        .map(|entry| match &entry.kind {
            EntryKind::Head(head) => view_head_name(head, usize::MAX),
            EntryKind::Branch(branch) => branch.name.clone(),
        })
        .chain(std::iter::once(String::new()))
        .collect()
}

/// Word-wrapped message block framed by blank lines
pub fn view_message(message: &[String], columns: usize) -> Vec<String> {
    let width = columns.saturating_sub(MESSAGE_MARGIN.len()).max(1);
    let options = textwrap::Options::new(width)
        .break_words(false)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);

    let body = message.iter().flat_map(|line| {
        if line.is_empty() {
            vec![String::new()]
        } else {
            textwrap::wrap(line, &options)
                .into_iter()
                .map(|wrapped| wrapped.into_owned())
                .collect()
        }
    });

    std::iter::once(String::new())
        .chain(body.map(|line| format!("{MESSAGE_MARGIN}{line}")))
        .chain([String::new(), String::new()])
        .collect()
}
