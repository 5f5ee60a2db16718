//! Layout types: Canvas, LayoutResult.

use super::graph::MaterialGraph;

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// Drawing surface size in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Canvas {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// A normalized graph together with the canvas it fits on.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub graph: MaterialGraph,
    pub canvas: Canvas,
}
