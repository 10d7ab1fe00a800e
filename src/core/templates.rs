//! Tag templates for long static texts such as the help screen.
//!
//! Tags never span lines and do not nest inside the same tag name.
//!
//! # Supported Tags
//! - `{bold}text{/bold}`: bold text
//! - `{dim}text{/dim}`: dimmed text
//! - `{wrap:N}text{/wrap}`: word-wrap `text` to the terminal width minus `N`
//!   columns; continuation lines are indented by `N` spaces, the first line is
//!   expected to be indented by the template itself

use crate::core::colors::{bold, dim};

/// Render every tag in `template` for a terminal `columns` wide
pub fn render_template(template: &str, columns: usize) -> String {
    template
        .split('\n')
        .map(|line| {
            let line = replace_tags(line, "bold", |_, content| bold(content));
            let line = replace_tags(&line, "dim", |_, content| dim(content));
            replace_tags(&line, "wrap", |padding, content| wrap(padding, content, columns))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace each `{name}...{/name}` or `{name:attr}...{/name}` in `line`
fn replace_tags(line: &str, name: &str, render: impl Fn(Option<&str>, &str) -> String) -> String {
    let open = format!("{{{name}");
    let close = format!("{{/{name}}}");

    let mut output = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find(&open) {
        let after_open = &rest[start + open.len()..];

        let Some(brace) = after_open.find('}') else {
            break;
        };
        let tag_tail = &after_open[..brace];
        let attribute = tag_tail.strip_prefix(':');

        // `{bolder}` and the like are not ours
        if !tag_tail.is_empty() && attribute.is_none() {
            output.push_str(&rest[..start + open.len()]);
            rest = after_open;
            continue;
        }

        let body = &after_open[brace + 1..];
        let Some(end) = body.find(&close) else {
            break;
        };

        output.push_str(&rest[..start]);
        output.push_str(&render(attribute, &body[..end]));
        rest = &body[end + close.len()..];
    }

    output.push_str(rest);
    output
}

fn wrap(padding: Option<&str>, content: &str, columns: usize) -> String {
    let Some(padding) = padding.and_then(|value| value.parse::<usize>().ok()) else {
        return content.to_string();
    };

    let options = textwrap::Options::new(columns.saturating_sub(padding).max(1))
        .break_words(false)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);

    textwrap::wrap(content.trim(), &options)
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.to_string()
            } else {
                format!("{}{line}", " ".repeat(padding))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colors::strip_ansi_codes;

    fn render_plain(template: &str, columns: usize) -> String {
        strip_ansi_codes(&render_template(template, columns))
    }

    #[test]
    fn test_style_tags_are_removed() {
        assert_eq!(
            render_plain("{bold}git jump{/bold} and {dim}--list{/dim}", 80),
            "git jump and --list"
        );
    }

    #[test]
    fn test_several_tags_on_one_line() {
        assert_eq!(render_plain("{bold}a{/bold} b {bold}c{/bold}", 80), "a b c");
    }

    #[test]
    fn test_unknown_and_unclosed_tags_stay() {
        assert_eq!(render_plain("{bolder} {name}", 80), "{bolder} {name}");
        assert_eq!(render_plain("{bold}open", 80), "{bold}open");
    }

    #[test]
    fn test_wrap_indents_continuation_lines() {
        let rendered = render_plain("    {wrap:4}one two three four{/wrap}", 14);
        assert_eq!(rendered, "    one two\n    three four");
    }

    #[test]
    fn test_wrap_without_padding_is_left_alone() {
        assert_eq!(render_plain("{wrap:x} a b {/wrap}", 10), " a b ");
    }

    #[test]
    fn test_lines_are_kept() {
        assert_eq!(render_plain("a\n\n{bold}b{/bold}\n", 80), "a\n\nb\n");
    }
}
