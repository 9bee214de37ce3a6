//! Fault Extractor: faulty assets for reporting.

use serde::Serialize;
use wn_network::{Network, Node, Pipe};

/// Nodes and pipes whose status is `faulty`, in network order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultyAssets<'a> {
    pub faulty_nodes: Vec<&'a Node>,
    pub faulty_pipes: Vec<&'a Pipe>,
}

impl FaultyAssets<'_> {
    pub fn total(&self) -> usize {
        self.faulty_nodes.len() + self.faulty_pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

pub fn get_faulty_assets(network: &Network) -> FaultyAssets<'_> {
    FaultyAssets {
        faulty_nodes: network
            .nodes()
            .iter()
            .filter(|n| n.status.is_faulty())
            .collect(),
        faulty_pipes: network
            .pipes()
            .iter()
            .filter(|p| p.status.is_faulty())
            .collect(),
    }
}
