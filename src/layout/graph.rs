//! MaterialGraph — folds the tag stream into a petgraph DiGraph.
//!
//! Node ids are the DiGraph's dense `NodeIndex` values, assigned in
//! declaration order. Links store no reference to their destination; the
//! edge target index is looked up in the graph when needed.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::config::RenderConfig;
use crate::error::{Result, VisualizerError};
use crate::syntax::types::{LINK_TAG, NODE_TAG, Tag, USER_PARAM_TAG, USER_VALUE_TAG};

/// A `(name, value)` pair attached by `userParam` / `userValue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// Node data stored in the DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Index of this node in declaration order.
    pub id: usize,
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub parameters: Vec<Parameter>,
    /// Distinct destination sockets of incoming links, first-seen order.
    pub available_inputs: Vec<String>,
}

impl NodeData {
    pub fn new(id: usize, name: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
            parameters: Vec::new(),
            available_inputs: Vec::new(),
        }
    }

    /// Row index of `socket` on this node's input side.
    pub fn input_slot(&self, socket: &str) -> Option<usize> {
        self.available_inputs.iter().position(|s| s == socket)
    }
}

/// Edge data stored in the DiGraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkData {
    pub socket_from: String,
    pub socket_to: String,
}

/// One outgoing link, resolved against the graph.
#[derive(Debug, Clone, Copy)]
pub struct Output<'a> {
    pub edge: EdgeIndex,
    pub target: NodeIndex,
    pub link: &'a LinkData,
}

/// The material graph after the builder pass.
#[derive(Debug, Clone, Default)]
pub struct MaterialGraph {
    pub digraph: DiGraph<NodeData, LinkData>,
    /// Maps node name → first node declared with that name.
    pub node_index: HashMap<String, NodeIndex>,
}

impl MaterialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from tags in file order.
    ///
    /// Unknown tag names are skipped. Parameters attach to the most recently
    /// declared node; links must name nodes declared earlier.
    pub fn from_tags(tags: &[Tag], config: &RenderConfig) -> Result<Self> {
        let mut graph = Self::new();
        let mut current: Option<NodeIndex> = None;

        for tag in tags {
            match tag.name.as_str() {
                NODE_TAG => {
                    let name = tag.require("name")?;
                    let x = coordinate(tag, "uiPosX")?;
                    let y = coordinate(tag, "uiPosY")?;
                    if !config.allow_duplicate_names && graph.node_index.contains_key(name) {
                        return Err(VisualizerError::DuplicateNodeName {
                            line: tag.line,
                            name: name.to_string(),
                        });
                    }
                    current = Some(graph.add_node(name, x, y));
                }
                USER_PARAM_TAG | USER_VALUE_TAG => {
                    let idx = current.ok_or_else(|| VisualizerError::NoCurrentNode {
                        line: tag.line,
                        tag: tag.name.clone(),
                    })?;
                    let name = tag.require("name")?;
                    let value = tag.require("value")?;
                    graph.digraph[idx].parameters.push(Parameter {
                        name: name.to_string(),
                        value: value.to_string(),
                    });
                }
                LINK_TAG => {
                    let node_from = tag.require("nodeFrom")?;
                    let socket_from = tag.require("socketFrom")?;
                    let node_to = tag.require("nodeTo")?;
                    let socket_to = tag.require("socketTo")?;
                    let from = graph.resolve(tag, node_from)?;
                    let to = graph.resolve(tag, node_to)?;
                    graph.add_link(from, socket_from, to, socket_to);
                }
                other => tracing::trace!(line = tag.line, tag = other, "ignoring tag"),
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            links = graph.edge_count(),
            "built material graph"
        );
        Ok(graph)
    }

    /// Add a node; the returned index is its id.
    pub fn add_node(&mut self, name: &str, x: i64, y: i64) -> NodeIndex {
        let id = self.digraph.node_count();
        let idx = self.digraph.add_node(NodeData::new(id, name, x, y));
        self.node_index.entry(name.to_string()).or_insert(idx);
        tracing::debug!(id, name, x, y, "declared node");
        idx
    }

    /// Add a link and register its destination socket on the target node.
    pub fn add_link(
        &mut self,
        from: NodeIndex,
        socket_from: &str,
        to: NodeIndex,
        socket_to: &str,
    ) -> EdgeIndex {
        let target = &mut self.digraph[to];
        if target.input_slot(socket_to).is_none() {
            target.available_inputs.push(socket_to.to_string());
        }
        tracing::debug!(
            from = from.index(),
            socket_from,
            to = to.index(),
            socket_to,
            "linked sockets"
        );
        self.digraph.add_edge(
            from,
            to,
            LinkData {
                socket_from: socket_from.to_string(),
                socket_to: socket_to.to_string(),
            },
        )
    }

    fn resolve(&self, tag: &Tag, name: &str) -> Result<NodeIndex> {
        self.find(name)
            .ok_or_else(|| VisualizerError::UnknownNodeReference {
                line: tag.line,
                name: name.to_string(),
            })
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0
    }

    /// Node id (declaration index) of the first node named `name`.
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &NodeData {
        &self.digraph[idx]
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.digraph.node_indices().map(move |i| &self.digraph[i])
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut NodeData> {
        self.digraph.node_weights_mut()
    }

    /// Outgoing links of `idx` in the order they were declared.
    pub fn outputs(&self, idx: NodeIndex) -> Vec<Output<'_>> {
        let mut outputs: Vec<Output<'_>> = self
            .digraph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| Output {
                edge: e.id(),
                target: e.target(),
                link: e.weight(),
            })
            .collect();
        outputs.sort_by_key(|o| o.edge);
        outputs
    }
}

/// Editor positions are 32-bit; anything wider is rejected here so layout
/// arithmetic stays far from `i64` limits.
fn coordinate(tag: &Tag, attribute: &'static str) -> Result<i64> {
    let raw = tag.require(attribute)?;
    raw.trim()
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| VisualizerError::InvalidCoordinate {
            line: tag.line,
            attribute,
            value: raw.to_string(),
        })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
