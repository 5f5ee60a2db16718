//! Parser trait definition and the single-line tag tokenizer.
//!
//! A material fragment is one element per line:
//! `<userParam name="roughness" value="0.4"/>`. The tokenizer does not try to
//! be an XML parser; it splits on the `" ` delimiter the exporter always emits
//! between attributes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, VisualizerError};
use crate::syntax::types::{Attr, Tag};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for tag-stream parsers.
pub trait Parser {
    /// Parse the input fragment into tags, in source order.
    fn parse(&self, src: &str) -> Result<Vec<Tag>>;
}

// ─── Attribute tokens ────────────────────────────────────────────────────────

/// Separator between consecutive `key="value"` pairs.
pub const ATTR_DELIMITER: &str = "\" ";

/// One attribute piece after splitting. [`ATTR_DELIMITER`] swallows the
/// closing quote on every piece but the last, so group 3 must be empty there
/// and must hold the quote on the last piece.
static ATTR_PIECE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([^\s="]+)\s*=\s*"([^"]*)("?)$"#).expect("attribute pattern is valid")
});

// ─── Line tokenizer ──────────────────────────────────────────────────────────

/// Parse one raw line into a [`Tag`].
///
/// Lines without `<` produce an unnamed tag. Comments, processing
/// instructions and closing tags keep their name but carry no attributes.
/// Every other element has its attributes tokenized whether or not the
/// graph builder uses the tag, so a malformed attribute on any element line
/// is a parse error.
pub fn parse_tag_line(line: usize, raw: &str) -> Result<Tag> {
    let trimmed = raw.trim();
    let Some(start) = trimmed.find('<') else {
        return Ok(Tag::new(line, ""));
    };
    let body = strip_brackets(&trimmed[start + 1..]);

    let (name, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
    let mut tag = Tag::new(line, name);
    if name.starts_with(['!', '?', '/']) {
        return Ok(tag);
    }

    let mut pieces = rest
        .split(ATTR_DELIMITER)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .peekable();
    while let Some(piece) = pieces.next() {
        let last = pieces.peek().is_none();
        tag.attrs.push(parse_attr(line, trimmed, piece, last)?);
    }
    Ok(tag)
}

/// Drop the closing `>` and any self-closing `/`.
fn strip_brackets(body: &str) -> &str {
    let body = body.trim_end();
    let body = body.strip_suffix('>').unwrap_or(body).trim_end();
    body.strip_suffix('/').unwrap_or(body).trim_end()
}

fn parse_attr(line: usize, content: &str, piece: &str, last: bool) -> Result<Attr> {
    let malformed = |reason| VisualizerError::Parse {
        line,
        content: content.to_string(),
        reason,
    };
    if !piece.contains('=') {
        return Err(malformed("attribute without `=`"));
    }
    let caps = ATTR_PIECE
        .captures(piece)
        .filter(|caps| caps[3].is_empty() != last)
        .ok_or_else(|| malformed("unbalanced quotes in attribute"))?;
    Ok(Attr::new(&caps[1], unescape_entities(&caps[2])))
}

/// Decode the five predefined XML entities. `&amp;` goes last so that
/// `&amp;lt;` stays `&lt;`.
pub fn unescape_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
