/// AST data structures for the material tag format.
///
/// One `Tag` per input line: `<shaderNodeInstance name="Mix" uiPosX="0" uiPosY="40">`
/// becomes name `shaderNodeInstance` plus three ordered attributes.
use crate::error::{Result, VisualizerError};

// ─── Tag names ───────────────────────────────────────────────────────────────

pub const NODE_TAG: &str = "shaderNodeInstance";
pub const USER_PARAM_TAG: &str = "userParam";
pub const USER_VALUE_TAG: &str = "userValue";
pub const LINK_TAG: &str = "link";

// ─── Attr ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ─── Tag ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    /// 1-based line number inside the material fragment.
    pub line: usize,
    /// Tag name (e.g. "link"). Empty for lines that hold no element.
    pub name: String,
    /// Attributes in source order.
    pub attrs: Vec<Attr>,
}

impl Tag {
    pub fn new(line: usize, name: impl Into<String>) -> Self {
        Self {
            line,
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Builder-style helper, mostly for tests.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// First attribute named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Like [`Tag::get`], failing with `MissingAttribute` when absent.
    pub fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or_else(|| VisualizerError::MissingAttribute {
            line: self.line,
            tag: self.name.clone(),
            attribute: key,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
