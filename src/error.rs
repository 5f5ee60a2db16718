//! Error type shared by every pipeline stage.
//!
//! Every variant carries enough context (line number, tag, attribute) to
//! locate the problem in the source material file.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisualizerError>;

#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("no input file given")]
    MissingArgument,

    #[error("could not locate `{marker}` in input")]
    MarkerNotFound { marker: &'static str },

    #[error("line {line}: {reason}: `{content}`")]
    Parse {
        line: usize,
        content: String,
        reason: &'static str,
    },

    #[error("line {line}: `{tag}` appears before any shaderNodeInstance")]
    NoCurrentNode { line: usize, tag: String },

    #[error("line {line}: link references undeclared node `{name}`")]
    UnknownNodeReference { line: usize, name: String },

    #[error("line {line}: attribute `{attribute}` is not an integer: `{value}`")]
    InvalidCoordinate {
        line: usize,
        attribute: &'static str,
        value: String,
    },

    #[error("line {line}: `{tag}` is missing required attribute `{attribute}`")]
    MissingAttribute {
        line: usize,
        tag: String,
        attribute: &'static str,
    },

    #[error("line {line}: node `{name}` is already declared")]
    DuplicateNodeName { line: usize, name: String },

    #[error("material graph has no nodes")]
    EmptyGraph,

    #[error("node `{name}` at ({x}, {y}) does not fit a canvas with margin {margin}")]
    CanvasOverflow {
        name: String,
        x: i64,
        y: i64,
        margin: i64,
    },

    #[error("unknown output format `{0}`; use svg, json or tree")]
    UnknownFormat(String),

    #[error("cannot serialize scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
