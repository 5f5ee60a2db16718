//! Line-oriented parser for material fragments.

use crate::error::Result;
use crate::syntax::types::Tag;

use super::base::{Parser, parse_tag_line};

/// Splits a fragment into lines and tokenizes each one.
///
/// Any malformed line aborts the whole parse: later links may depend on
/// every earlier node declaration, so skipping a line is never safe.
pub struct MaterialParser;

impl Parser for MaterialParser {
    fn parse(&self, src: &str) -> Result<Vec<Tag>> {
        let mut tags = Vec::new();
        for (i, raw) in src.lines().enumerate() {
            let tag = parse_tag_line(i + 1, raw)?;
            if !tag.name.is_empty() {
                tags.push(tag);
            }
        }
        Ok(tags)
    }
}
