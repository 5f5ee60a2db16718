//! Renderer registry and Renderer trait.

pub mod json;
pub mod shapes;
pub mod svg;
pub mod tree;
pub mod wrap;

use std::str::FromStr;

pub use json::JsonRenderer;
pub use svg::SvgRenderer;
pub use tree::TreeRenderer;

use crate::config::RenderConfig;
use crate::error::{Result, VisualizerError};
use crate::layout::types::LayoutResult;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a laid-out graph to a string.
    fn render(&self, layout: &LayoutResult) -> Result<String>;
}

/// What the pipeline writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
    Tree,
}

impl OutputFormat {
    /// File extension used when the output path is derived from the input.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
            OutputFormat::Tree => "txt",
        }
    }

    pub fn renderer<'a>(&self, config: &'a RenderConfig) -> Box<dyn Renderer + 'a> {
        match self {
            OutputFormat::Svg => Box::new(SvgRenderer::new(config)),
            OutputFormat::Json => Box::new(JsonRenderer::new(config)),
            OutputFormat::Tree => Box::new(TreeRenderer),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "" | "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            "tree" | "txt" => Ok(OutputFormat::Tree),
            other => Err(VisualizerError::UnknownFormat(other.to_string())),
        }
    }
}
