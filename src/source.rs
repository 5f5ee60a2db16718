//! Locating the material fragment inside an exported file, and naming the
//! file the render goes to.

use std::path::{Path, PathBuf};

use crate::error::{Result, VisualizerError};

pub const FRAGMENT_START: &str = "<materialInstance";
pub const FRAGMENT_END: &str = "materialInstance>";

/// Slice of `text` from the first [`FRAGMENT_START`] through the last
/// [`FRAGMENT_END`] that follows it, both markers included.
pub fn extract_fragment(text: &str) -> Result<&str> {
    let start = text
        .find(FRAGMENT_START)
        .ok_or(VisualizerError::MarkerNotFound {
            marker: FRAGMENT_START,
        })?;
    let end = text[start..]
        .rfind(FRAGMENT_END)
        .map(|i| start + i + FRAGMENT_END.len())
        .ok_or(VisualizerError::MarkerNotFound {
            marker: FRAGMENT_END,
        })?;
    Ok(&text[start..end])
}

/// Read the whole file and keep only the material fragment.
///
/// Material exports are mostly binary; bytes outside UTF-8 are replaced
/// before the markers are searched.
pub fn read_fragment(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| VisualizerError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let fragment = extract_fragment(&text)?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        fragment = fragment.len(),
        "located material fragment"
    );
    Ok(fragment.to_string())
}

/// `input` with its extension replaced by `extension`.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

#[cfg(test)]
#[path = "../tests/rust/test_source.rs"]
mod tests;
