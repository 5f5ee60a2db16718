//! SVG renderer — lays a normalized material graph out as shapes and
//! serializes them into one SVG document.
//!
//! Per node, in declaration order: outgoing links, card rectangle, title,
//! then the wrapped parameter rows. Links come first so the cards cover
//! their start and end stubs.

use petgraph::graph::NodeIndex;

use super::Renderer;
use super::shapes::{Anchor, Arrow, Color, Rectangle, Shape, Text};
use super::wrap::wrap_text;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::graph::{MaterialGraph, NodeData};
use crate::layout::types::LayoutResult;

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Flatten the laid-out graph into drawable shapes, back to front.
pub fn build_scene(layout: &LayoutResult, config: &RenderConfig) -> Vec<Shape> {
    let graph = &layout.graph;
    let mut scene = Vec::new();
    for idx in graph.digraph.node_indices() {
        push_links(&mut scene, graph, idx, config);
        push_card(&mut scene, graph.node(idx), config);
    }
    scene
}

fn push_links(
    scene: &mut Vec<Shape>,
    graph: &MaterialGraph,
    idx: NodeIndex,
    config: &RenderConfig,
) {
    let node = graph.node(idx);
    for (index, output) in graph.outputs(idx).iter().enumerate() {
        let dest = graph.node(output.target);
        // `add_link` registers every destination socket. An edge pushed straight
        // into `digraph` skips that, so draw it below the registered inputs.
        let slot = dest.input_slot(&output.link.socket_to).unwrap_or_else(|| {
            tracing::warn!(
                node = %dest.name,
                socket = %output.link.socket_to,
                "link targets an unregistered input socket"
            );
            dest.available_inputs.len()
        });

        let start_x = node.x + config.node_width;
        let start_y = node.y + config.top_edge_margin + index as i64 * config.inter_edge_spacing;
        let end_x = dest.x;
        let end_y = dest.y + config.top_edge_margin + slot as i64 * config.inter_edge_spacing;

        scene.push(Shape::Arrow(Arrow {
            start_x,
            start_y,
            end_x,
            end_y,
            curviness: config.curviness,
            stroke_width: config.edge_stroke_width,
            color: Color::ARROW,
        }));
        scene.push(Shape::Text(Text {
            x: start_x + config.text_margin,
            y: start_y - config.text_margin,
            size: config.socket_label_size,
            anchor: Anchor::Start,
            color: Color::SUB_TEXT,
            string: output.link.socket_from.clone(),
        }));
        scene.push(Shape::Text(Text {
            x: end_x - config.text_margin,
            y: end_y - config.text_margin,
            size: config.socket_label_size,
            anchor: Anchor::End,
            color: Color::SUB_TEXT,
            string: output.link.socket_to.clone(),
        }));
    }
}

fn push_card(scene: &mut Vec<Shape>, node: &NodeData, config: &RenderConfig) {
    scene.push(Shape::Rectangle(Rectangle {
        x: node.x,
        y: node.y,
        width: config.node_width,
        height: config.node_height,
        color: Color::GREY_BACKGROUND,
    }));

    let text_x = node.x + config.text_margin;
    let title_baseline = node.y + config.title_size + config.text_margin;
    scene.push(Shape::Text(Text {
        x: text_x,
        y: title_baseline,
        size: config.title_size,
        anchor: Anchor::Start,
        color: Color::DARK_TEXT,
        string: node.name.clone(),
    }));

    let first_row = title_baseline + config.title_size;
    let row_height = config.param_text_size + config.param_row_gap;
    let rows = node.parameters.iter().flat_map(|p| {
        wrap_text(
            &format!("{}: {}", p.name, p.value),
            config.param_row_width(),
            config.param_char_width(),
        )
    });
    for (row, line) in rows.enumerate() {
        scene.push(Shape::Text(Text {
            x: text_x,
            y: first_row + row as i64 * row_height,
            size: config.param_text_size,
            anchor: Anchor::Start,
            color: Color::DARK_TEXT,
            string: line,
        }));
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Renders a layout as a standalone SVG document.
pub struct SvgRenderer<'a> {
    pub config: &'a RenderConfig,
}

impl<'a> SvgRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl Renderer for SvgRenderer<'_> {
    fn render(&self, layout: &LayoutResult) -> Result<String> {
        let (w, h) = (layout.canvas.width, layout.canvas.height);
        let mut parts = vec![
            format!(
                r#"<svg version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#
            ),
            format!(
                r##"<rect width="100%" height="100%" fill="#{}"/>"##,
                Color::LIGHT_BACKGROUND.hex()
            ),
        ];
        parts.extend(build_scene(layout, self.config).iter().map(Shape::to_svg));
        parts.push("</svg>".to_string());
        Ok(parts.join("\n") + "\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
