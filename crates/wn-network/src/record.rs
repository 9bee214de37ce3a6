//! Flat node and pipe records.

use serde::{Deserialize, Serialize};
use wn_core::{Measure, Status};

use crate::geometry::{LineGeometry, PointGeometry};

/// A junction, reservoir, or demand point.
///
/// Hydraulic and topological attributes (pressure, head, betweenness,
/// degree, eccentricity) are precomputed upstream and copied as-is.
/// Text attributes the source feature did not carry are `None`; numeric
/// ones record whether the key was absent or `null` (see `Measure`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: Option<String>,
    pub p_name: Option<String>,
    pub start_node_name: Option<String>,
    pub end_node_name: Option<String>,
    pub node_id: Option<String>,
    pub elevation: Measure,
    pub betweennes: Measure,
    pub node_degre: Measure,
    pub eccentrici: Measure,
    pub start_latitude: Measure,
    pub start_longitude: Measure,
    pub pressure: Measure,
    pub head: Measure,
    pub demand: Measure,
    pub end_latitude: Measure,
    pub end_longitude: Measure,
    pub elevation_y: Measure,
    pub length: Measure,
    pub status: Status,
    pub geometry: Option<PointGeometry>,
}

/// A conduit segment between two nodes.
///
/// `start_node` and `end_node_n` name a `Node::node_id`; nothing here
/// checks that the referenced node exists (see `audit_references`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipe {
    pub line_id: Option<String>,
    pub start_node: Option<String>,
    pub end_node_n: Option<String>,
    pub diameter: Measure,
    pub roughness: Measure,
    pub length: Measure,
    pub status: Status,
    pub velocity: Measure,
    pub flow_rate: Measure,
    pub geometry: Option<LineGeometry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_have_unknown_status() {
        assert!(Node::default().status.is_unknown());
        assert!(Pipe::default().status.is_unknown());
    }

    #[test]
    fn node_serializes_flat() {
        let node = Node {
            node_id: Some("J-1".into()),
            pressure: Measure::Value(42.0),
            demand: Measure::Null,
            status: Status::normalize(Some("Normal")),
            ..Node::default()
        };
        let v = serde_json::to_value(&node).unwrap();
        assert_eq!(v["node_id"], "J-1");
        assert_eq!(v["pressure"], 42.0);
        assert_eq!(v["status"], "normal");
        assert!(v["demand"].is_null());
        assert!(v["head"].is_null());
    }

    #[test]
    fn missing_and_null_numbers_deserialize_apart() {
        let node: Node = serde_json::from_str(r#"{"pressure": null, "status": "Faulty"}"#).unwrap();
        assert_eq!(node.pressure, Measure::Null);
        assert_eq!(node.demand, Measure::Absent);
        assert!(node.status.is_faulty());
    }
}
