//! Coordinate normalization — moves the graph into positive canvas space.

use crate::error::{Result, VisualizerError};

use super::graph::MaterialGraph;
use super::types::Canvas;

/// Largest canvas edge accepted. Renderers add card sizes and edge offsets on
/// top of node positions, so the layout keeps well inside `i64`.
pub const MAX_CANVAS_EXTENT: i64 = i32::MAX as i64;

/// Shift every node so that the graph keeps at least `margin` units from the
/// top-left corner, then size the canvas to leave `margin` past the
/// bottom-right-most node origin.
///
/// Running it again on an already normalized graph moves nothing.
pub fn normalize(graph: &mut MaterialGraph, margin: i64) -> Result<Canvas> {
    let (min_x, min_y) = graph
        .nodes()
        .fold(None, |acc: Option<(i64, i64)>, n| match acc {
            None => Some((n.x, n.y)),
            Some((x, y)) => Some((x.min(n.x), y.min(n.y))),
        })
        .ok_or(VisualizerError::EmptyGraph)?;

    let shift_x = min_x.saturating_sub(margin).min(0);
    let shift_y = min_y.saturating_sub(margin).min(0);

    // Check every shifted position and canvas edge before moving anything.
    let mut width = i64::MIN;
    let mut height = i64::MIN;
    for node in graph.nodes() {
        let overflow = || VisualizerError::CanvasOverflow {
            name: node.name.clone(),
            x: node.x,
            y: node.y,
            margin,
        };
        let x = node.x.checked_sub(shift_x).ok_or_else(overflow)?;
        let y = node.y.checked_sub(shift_y).ok_or_else(overflow)?;
        let right = x.checked_add(margin).filter(|r| *r <= MAX_CANVAS_EXTENT);
        let bottom = y.checked_add(margin).filter(|b| *b <= MAX_CANVAS_EXTENT);
        width = width.max(right.ok_or_else(overflow)?);
        height = height.max(bottom.ok_or_else(overflow)?);
    }

    if shift_x < 0 || shift_y < 0 {
        for node in graph.nodes_mut() {
            node.x -= shift_x;
            node.y -= shift_y;
        }
    }
    let canvas = Canvas::new(width, height);
    tracing::debug!(
        shift_x = shift_x.unsigned_abs(),
        shift_y = shift_y.unsigned_abs(),
        width = canvas.width,
        height = canvas.height,
        "normalized layout"
    );
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_normalize.rs"]
mod tests;
