//! Tree renderer — a plain-text dump of every node, for inspecting what the
//! builder made of a material file.
//!
//! ```text
//! Mix
//! ├── Coordinates: (150, 150)
//! ├── Parameters
//! │   └── factor -> 0.5
//! ├── Inputs
//! │   └── a
//! └── Outputs
//!     └── rgb -> (base Out)
//! ```

use super::Renderer;
use crate::error::Result;
use crate::layout::types::LayoutResult;

struct Item {
    label: String,
    children: Vec<Item>,
}

impl Item {
    fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn branch(label: impl Into<String>, children: Vec<Item>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    fn write(&self, prefix: &str, out: &mut String) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            out.push_str(prefix);
            out.push_str(if last { "└── " } else { "├── " });
            out.push_str(&child.label);
            out.push('\n');
            let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
            child.write(&nested, out);
        }
    }
}

pub struct TreeRenderer;

impl Renderer for TreeRenderer {
    fn render(&self, layout: &LayoutResult) -> Result<String> {
        let graph = &layout.graph;
        let mut out = String::new();
        for idx in graph.digraph.node_indices() {
            let node = graph.node(idx);
            let parameters = node
                .parameters
                .iter()
                .map(|p| Item::leaf(format!("{} -> {}", p.name, p.value)))
                .collect();
            let inputs = node.available_inputs.iter().map(Item::leaf).collect();
            let outputs = graph
                .outputs(idx)
                .iter()
                .map(|o| {
                    Item::leaf(format!(
                        "{} -> ({} {})",
                        o.link.socket_from,
                        o.link.socket_to,
                        graph.node(o.target).name
                    ))
                })
                .collect();
            let root = Item::branch(
                node.name.clone(),
                vec![
                    Item::leaf(format!("Coordinates: ({}, {})", node.x, node.y)),
                    Item::branch("Parameters", parameters),
                    Item::branch("Inputs", inputs),
                    Item::branch("Outputs", outputs),
                ],
            );
            out.push_str(&root.label);
            out.push('\n');
            root.write("", &mut out);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_tree.rs"]
mod tests;
