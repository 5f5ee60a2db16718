//! Parsed form of the material tag format.

pub mod types;

pub use types::{Attr, Tag};
