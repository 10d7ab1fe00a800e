//! Terminal styling and width helpers.
//!
//! All SGR output goes through the small wrappers here so that every screen
//! uses the same palette. Width calculations ignore escape sequences and count
//! terminal columns, not bytes.
//!
//! # Color Scheme
//! - **Highlight**: blue, the selected list line
//! - **Success / failure**: green / red status indicator in front of git commands
//! - **Warning**: yellow, titles of input errors and version numbers
//! - **Dim**: placeholders, hints, quick-select digits, command strings

use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn dim(text: &str) -> String {
    text.dimmed().to_string()
}

pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

pub fn highlight(text: &str) -> String {
    text.blue().to_string()
}

pub fn green(text: &str) -> String {
    text.green().to_string()
}

pub fn yellow(text: &str) -> String {
    text.yellow().to_string()
}

pub fn red(text: &str) -> String {
    text.red().to_string()
}

/// Colored marker placed in front of a git command line
pub fn status_indicator(status: i32) -> String {
    if status == 0 {
        green("‣ ")
    } else {
        red("‣ ")
    }
}

pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Columns taken on screen, escape sequences excluded
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi_codes(text).as_str())
}

/// Cut plain `text` to `max_width` columns, marking the cut with `…`
pub fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        width += ch_width;
        result.push(ch);
    }

    result.push('…');
    result
}

pub fn pad_end(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(padding))
}

pub fn pad_start(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(padding))
}
