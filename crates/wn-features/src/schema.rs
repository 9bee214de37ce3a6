//! Raw feature-collection input schema.
//!
//! Only the envelope is typed here. Property values stay as JSON until the
//! mapper reads the keys it knows about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

/// Property keys exported by the GIS layers.
///
/// Some keys are truncated to ten characters by the shapefile origin of
/// the data (`betweennes`, `node_degre`, `eccentrici`, `end_node_n`).
pub mod keys {
    pub const STATUS: &str = "Status";

    pub const NODE_ID: &str = "node_id";
    pub const P_NAME: &str = "p_name";
    pub const START_NODE_NAME: &str = "start_node_name";
    pub const END_NODE_NAME: &str = "end_node_name";
    pub const ELEVATION: &str = "elevation";
    pub const BETWEENNESS: &str = "betweennes";
    pub const NODE_DEGREE: &str = "node_degre";
    pub const ECCENTRICITY: &str = "eccentrici";
    pub const START_LATITUDE: &str = "start_latitude";
    pub const START_LONGITUDE: &str = "start_longitude";
    pub const PRESSURE: &str = "pressure";
    pub const HEAD: &str = "head";
    pub const DEMAND: &str = "demand";
    pub const END_LATITUDE: &str = "end_latitude";
    pub const END_LONGITUDE: &str = "end_longitude";
    pub const ELEVATION_Y: &str = "elevation_y";
    pub const LENGTH: &str = "length";

    pub const LINE_ID: &str = "line_id";
    pub const START_NODE: &str = "start_node";
    pub const END_NODE: &str = "end_node_n";
    pub const DIAMETER: &str = "diameter";
    pub const ROUGHNESS: &str = "roughness";
    pub const VELOCITY: &str = "Velocity";
    pub const FLOW_RATE: &str = "flow_rate";
}
