//! Layout engine — graph construction and coordinate normalization.

pub mod graph;
pub mod normalize;
pub mod types;

pub use graph::{LinkData, MaterialGraph, NodeData, Parameter};
pub use normalize::normalize;
pub use types::{Canvas, LayoutResult};

use crate::config::RenderConfig;
use crate::error::Result;

/// Normalize `graph` once and pair it with its canvas.
pub fn full_layout(mut graph: MaterialGraph, config: &RenderConfig) -> Result<LayoutResult> {
    let canvas = normalize(&mut graph, config.margin)?;
    Ok(LayoutResult { graph, canvas })
}
