//! JSON renderer — the same scene the SVG renderer draws, as data.

use super::Renderer;
use super::svg::build_scene;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::types::LayoutResult;

pub struct JsonRenderer<'a> {
    pub config: &'a RenderConfig,
}

impl<'a> JsonRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl Renderer for JsonRenderer<'_> {
    fn render(&self, layout: &LayoutResult) -> Result<String> {
        let scene = build_scene(layout, self.config);
        let mut out = serde_json::to_string_pretty(&scene)?;
        out.push('\n');
        Ok(out)
    }
}
