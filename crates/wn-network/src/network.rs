//! The mapped network: both record collections, frozen.

use crate::record::{Node, Pipe};

/// Immutable collection of node and pipe records.
///
/// Record order matches the order of the source features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    nodes: Vec<Node>,
    pipes: Vec<Pipe>,
}

impl Network {
    pub fn new(nodes: Vec<Node>, pipes: Vec<Pipe>) -> Self {
        Self { nodes, pipes }
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all pipes.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.pipes.is_empty()
    }

    /// First node whose `node_id` matches.
    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.node_id.as_deref() == Some(node_id))
    }

    /// First pipe whose `line_id` matches.
    pub fn pipe(&self, line_id: &str) -> Option<&Pipe> {
        self.pipes
            .iter()
            .find(|p| p.line_id.as_deref() == Some(line_id))
    }
}
