//! Pipe endpoint reference audit.
//!
//! Mapping never enforces referential integrity between pipes and nodes.
//! This audit reports where the source data breaks it, without failing.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::network::Network;

/// Which end of a pipe a reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeEnd {
    Start,
    End,
}

/// A pipe endpoint that does not resolve to a node.
///
/// `node_ref` is `None` when the pipe does not name that endpoint at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub pipe_index: usize,
    pub line_id: Option<String>,
    pub end: PipeEnd,
    pub node_ref: Option<String>,
}

/// Findings of [`audit_references`], in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceReport {
    pub dangling: Vec<DanglingReference>,
    pub duplicate_node_ids: Vec<String>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_node_ids.is_empty()
    }
}

/// Check every pipe endpoint against the set of node ids.
pub fn audit_references(network: &Network) -> ReferenceReport {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicate_node_ids = Vec::new();
    for id in network.nodes().iter().filter_map(|n| n.node_id.as_deref()) {
        let count = seen.entry(id).or_insert(0);
        *count += 1;
        // Report each duplicated id once, at its second occurrence
        if *count == 2 {
            duplicate_node_ids.push(id.to_string());
        }
    }
    let known: HashSet<&str> = seen.into_keys().collect();

    let mut dangling = Vec::new();
    for (pipe_index, pipe) in network.pipes().iter().enumerate() {
        for (end, node_ref) in [
            (PipeEnd::Start, pipe.start_node.as_deref()),
            (PipeEnd::End, pipe.end_node_n.as_deref()),
        ] {
            if node_ref.is_some_and(|id| known.contains(id)) {
                continue;
            }
            tracing::warn!(
                pipe_index,
                line_id = pipe.line_id.as_deref().unwrap_or("?"),
                ?end,
                node_ref = node_ref.unwrap_or("<none>"),
                "pipe endpoint does not resolve to a node"
            );
            dangling.push(DanglingReference {
                pipe_index,
                line_id: pipe.line_id.clone(),
                end,
                node_ref: node_ref.map(str::to_string),
            });
        }
    }

    for id in &duplicate_node_ids {
        tracing::warn!(node_id = %id, "node id occurs more than once");
    }

    ReferenceReport {
        dangling,
        duplicate_node_ids,
    }
}
