use super::*;

/// Parameter rows: 8-unit font, half-width characters, 20 per row.
const WIDTH: i64 = 80;
const CHAR: i64 = 4;

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn assert_preserves(text: &str, lines: &[String]) {
    assert_eq!(squash(&lines.concat()), squash(text), "lines: {lines:?}");
}

#[test]
fn test_short_text_single_line() {
    assert_eq!(wrap_text("roughness: 0.4", WIDTH, CHAR), vec!["roughness: 0.4"]);
}

#[test]
fn test_empty_text_no_lines() {
    assert!(wrap_text("", WIDTH, CHAR).is_empty());
    assert!(wrap_text("   \n ", WIDTH, CHAR).is_empty());
}

#[test]
fn test_greedy_break_between_words() {
    let lines = wrap_text("texture: wood planks albedo map", WIDTH, CHAR);
    assert_eq!(lines, vec!["texture: wood planks", "albedo map"]);
    for line in &lines {
        assert!(line.chars().count() as i64 * CHAR <= WIDTH);
    }
}

#[test]
fn test_newline_is_a_separator() {
    let lines = wrap_text("a\nb", WIDTH, CHAR);
    assert_eq!(lines, vec!["a b"]);
}

#[test]
fn test_word_exactly_one_row_is_not_split() {
    let word = "abcdefghijklmnopqrst";
    assert_eq!(word.len(), 20);
    let lines = wrap_text(word, WIDTH, CHAR);
    assert_eq!(lines, vec![word]);
}

#[test]
fn test_long_word_is_chunked_without_gap_or_overlap() {
    let word = "abcdefghijklmnopqrstABCDEFGHIJKLMNOPQRST";
    let lines = wrap_text(word, WIDTH, CHAR);
    assert_eq!(lines, vec!["abcdefghijklmnopqrst", "ABCDEFGHIJKLMNOPQRST"]);
    assert_eq!(lines.concat(), word);
}

#[test]
fn test_long_word_after_text_starts_new_line() {
    let lines = wrap_text("path: C:/materials/wood/planks_albedo.png", WIDTH, CHAR);
    assert_eq!(
        lines,
        vec!["path:", "C:/materials/wood/pl", "anks_albedo.png"]
    );
}

#[test]
fn test_last_chunk_accepts_following_word() {
    let lines = wrap_text("abcdefghijklmnopqrstuv x", WIDTH, CHAR);
    assert_eq!(lines, vec!["abcdefghijklmnopqrst", "uv x"]);
}

#[test]
fn test_multibyte_characters_counted_once() {
    let word = "é".repeat(21);
    let lines = wrap_text(&word, WIDTH, CHAR);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chars().count(), 20);
    assert_eq!(lines[1], "é");
}

#[test]
fn test_content_preserved() {
    for text in [
        "a b c d e f g h i j k l m n o p q r s t u v w x y z",
        "value: 0.25 0.5 0.75 1.0",
        "x: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa bb",
        "   leading and trailing   ",
    ] {
        assert_preserves(text, &wrap_text(text, WIDTH, CHAR));
    }
}

#[test]
fn test_degenerate_widths_still_preserve() {
    let lines = wrap_text("abc de", 1, 4);
    assert_preserves("abc de", &lines);
    assert!(lines.iter().all(|l| !l.is_empty()));
}
