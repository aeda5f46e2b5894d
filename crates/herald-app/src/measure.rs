//! Row content measurement
//!
//! The feed surface sizes itself from its content, so row heights have to be
//! computed the same way the frontend renders them: display-width-aware
//! greedy word wrapping.

use unicode_width::UnicodeWidthStr;

/// Wrap a single line of text to fit within `max_width` display columns.
///
/// Words that fit are packed greedily; a word wider than the whole line is
/// placed on its own line rather than split. `max_width == 0` disables
/// wrapping.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_inclusive(|c: char| c.is_whitespace()) {
        let word_width = UnicodeWidthStr::width(word);

        if current_width + word_width > max_width && !current_line.is_empty() {
            lines.push(current_line.trim_end().to_string());
            current_line = word.trim_start().to_string();
            current_width = UnicodeWidthStr::width(current_line.as_str());
        } else {
            current_line.push_str(word);
            current_width += word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.trim_end().to_string());
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Number of display lines `text` occupies when wrapped to `max_width`.
/// Embedded newlines start fresh lines; empty text still occupies one.
pub fn line_count(text: &str, max_width: usize) -> usize {
    if text.is_empty() {
        return 1;
    }
    text.lines()
        .map(|line| wrap_text(line, max_width).len())
        .sum()
}
