//! Tag parsers for material fragments.

pub mod base;
pub mod material;

pub use base::Parser;

use crate::error::Result;
use crate::syntax::types::Tag;
use material::MaterialParser;

/// Parse a material fragment into its tag stream.
pub fn parse(src: &str) -> Result<Vec<Tag>> {
    let tags = MaterialParser.parse(src)?;
    tracing::debug!(tags = tags.len(), "parsed material fragment");
    Ok(tags)
}
