//! material-visualizer — shader material graph fragments to SVG diagrams.
//!
//! Public API: `render_material()` / `render_file()`.
//!
//! Pipeline: fragment → tags (`parsers`) → `MaterialGraph` (`layout::graph`)
//! → normalized `LayoutResult` (`layout::normalize`) → renderer.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod source;
pub mod syntax;

#[cfg(feature = "wasm")]
mod wasm;

use std::path::{Path, PathBuf};

pub use crate::config::RenderConfig;
pub use crate::error::{Result, VisualizerError};
pub use crate::renderers::OutputFormat;

use crate::layout::{LayoutResult, MaterialGraph, full_layout};
use crate::parsers::parse;
use crate::renderers::Renderer;
use crate::source::{extract_fragment, output_path, read_fragment};

/// Parse, build and normalize a material fragment.
pub fn layout_fragment(fragment: &str, config: &RenderConfig) -> Result<LayoutResult> {
    let tags = parse(fragment)?;
    let graph = MaterialGraph::from_tags(&tags, config)?;
    full_layout(graph, config)
}

/// Render the material fragment found in `src` in the requested format.
pub fn render_material(src: &str, config: &RenderConfig, format: OutputFormat) -> Result<String> {
    let fragment = extract_fragment(src)?;
    let layout = layout_fragment(fragment, config)?;
    format.renderer(config).render(&layout)
}

/// Render `input` and write the result next to it (or to `output`).
///
/// Everything is rendered in memory first; nothing is written unless the
/// whole pipeline succeeds. Returns the path written.
pub fn render_file(
    input: &Path,
    output: Option<&Path>,
    config: &RenderConfig,
    format: OutputFormat,
) -> Result<PathBuf> {
    let fragment = read_fragment(input)?;
    let layout = layout_fragment(&fragment, config)?;
    let rendered = format.renderer(config).render(&layout)?;

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path(input, format.extension()));
    std::fs::write(&out_path, rendered).map_err(|source| VisualizerError::Io {
        action: "write",
        path: out_path.clone(),
        source,
    })?;
    tracing::info!(
        input = %input.display(),
        output = %out_path.display(),
        nodes = layout.graph.node_count(),
        links = layout.graph.edge_count(),
        "rendered material"
    );
    Ok(out_path)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
