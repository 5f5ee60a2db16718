//! Greedy word wrap for on-canvas text.
//!
//! Widths are in layout units; every character is assumed to be
//! `char_width` units wide. Words longer than a whole line are hard-split so
//! that no character is ever dropped.

use std::mem;

/// Wrap `text` into lines no wider than `target_width`.
///
/// A word joins the current line while
/// `(line length + word length + 1) * char_width <= target_width`. A word
/// that is wider than `target_width` on its own is cut into chunks of
/// `target_width / char_width` characters; the last chunk stays open so the
/// next word may still join it.
pub fn wrap_text(text: &str, target_width: i64, char_width: i64) -> Vec<String> {
    let char_width = char_width.max(1);
    let chunk_len = (target_width / char_width).max(1) as usize;

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split(char::is_whitespace) {
        if word.is_empty() {
            continue;
        }
        let word_len = word.chars().count();

        if (current_len + word_len + 1) as i64 * char_width <= target_width {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
            continue;
        }

        if !current.is_empty() {
            lines.push(mem::take(&mut current));
        }

        if word_len as i64 * char_width > target_width {
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(chunk_len).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    lines.push(piece);
                } else {
                    current_len = chunk.len();
                    current = piece;
                }
            }
        } else {
            current = word.to_string();
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_wrap.rs"]
mod tests;
