//! WASM bindings for material-visualizer.
//!
//! Exposes `render` and `renderWithFormat` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{OutputFormat, RenderConfig};

/// Render the material fragment in `src` to SVG with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_material(src, &RenderConfig::default(), OutputFormat::Svg)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render with an explicit format and margin.
///
/// - `format`: "svg", "json" or "tree" (empty string for svg)
/// - `margin`: space kept around the outermost nodes
#[wasm_bindgen(js_name = "renderWithFormat")]
pub fn render_with_format(src: &str, format: &str, margin: i32) -> Result<String, JsError> {
    let format: OutputFormat = format.parse().map_err(|e: crate::VisualizerError| {
        JsError::new(&e.to_string())
    })?;
    let config = RenderConfig {
        margin: i64::from(margin),
        ..RenderConfig::default()
    };
    crate::render_material(src, &config, format).map_err(|e| JsError::new(&e.to_string()))
}
