//! Feature Mapper: feature collections to flat node and pipe records.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use wn_core::{Measure, Status};
use wn_network::{LineGeometry, Network, Node, Pipe, PointGeometry};

use crate::schema::{Feature, FeatureCollection, keys};
use crate::{FeatureError, FeatureResult, Layer};

/// Read access to one feature's properties, carrying error context.
struct Props<'a> {
    layer: Layer,
    index: usize,
    map: &'a Map<String, Value>,
}

impl<'a> Props<'a> {
    fn of(layer: Layer, index: usize, feature: &'a Feature) -> FeatureResult<Self> {
        let map = feature
            .properties
            .as_ref()
            .ok_or(FeatureError::MissingProperties { layer, index })?;
        Ok(Self { layer, index, map })
    }

    fn invalid(&self, key: &'static str, expected: &'static str) -> FeatureError {
        FeatureError::InvalidProperty {
            layer: self.layer,
            index: self.index,
            key,
            expected,
        }
    }

    /// Identifier-like text. GIS exports often store ids as numbers.
    fn text(&self, key: &'static str) -> FeatureResult<Option<String>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(self.invalid(key, "string")),
        }
    }

    fn number(&self, key: &'static str) -> FeatureResult<Measure> {
        match self.map.get(key) {
            None => Ok(Measure::Absent),
            Some(Value::Null) => Ok(Measure::Null),
            Some(Value::Number(n)) => Ok(n.as_f64().into()),
            Some(_) => Err(self.invalid(key, "number")),
        }
    }

    fn status(&self) -> FeatureResult<Status> {
        match self.map.get(keys::STATUS) {
            None | Some(Value::Null) => Ok(Status::unknown()),
            Some(Value::String(s)) => Ok(Status::normalize(Some(s))),
            Some(_) => Err(self.invalid(keys::STATUS, "string")),
        }
    }
}

fn geometry<G: DeserializeOwned>(
    layer: Layer,
    index: usize,
    feature: &Feature,
) -> FeatureResult<Option<G>> {
    match &feature.geometry {
        None | Some(Value::Null) => Ok(None),
        Some(value) => G::deserialize(value)
            .map(Some)
            .map_err(|e| FeatureError::InvalidGeometry {
                layer,
                index,
                reason: e.to_string(),
            }),
    }
}

fn map_node(index: usize, feature: &Feature) -> FeatureResult<Node> {
    let p = Props::of(Layer::Nodes, index, feature)?;
    let node_id = p.text(keys::NODE_ID)?;
    Ok(Node {
        id: node_id.clone(),
        p_name: p.text(keys::P_NAME)?,
        start_node_name: p.text(keys::START_NODE_NAME)?,
        end_node_name: p.text(keys::END_NODE_NAME)?,
        node_id,
        elevation: p.number(keys::ELEVATION)?,
        betweennes: p.number(keys::BETWEENNESS)?,
        node_degre: p.number(keys::NODE_DEGREE)?,
        eccentrici: p.number(keys::ECCENTRICITY)?,
        start_latitude: p.number(keys::START_LATITUDE)?,
        start_longitude: p.number(keys::START_LONGITUDE)?,
        pressure: p.number(keys::PRESSURE)?,
        head: p.number(keys::HEAD)?,
        demand: p.number(keys::DEMAND)?,
        end_latitude: p.number(keys::END_LATITUDE)?,
        end_longitude: p.number(keys::END_LONGITUDE)?,
        elevation_y: p.number(keys::ELEVATION_Y)?,
        length: p.number(keys::LENGTH)?,
        status: p.status()?,
        geometry: geometry::<PointGeometry>(Layer::Nodes, index, feature)?,
    })
}

fn map_pipe(index: usize, feature: &Feature) -> FeatureResult<Pipe> {
    let p = Props::of(Layer::Pipes, index, feature)?;
    Ok(Pipe {
        line_id: p.text(keys::LINE_ID)?,
        start_node: p.text(keys::START_NODE)?,
        end_node_n: p.text(keys::END_NODE)?,
        diameter: p.number(keys::DIAMETER)?,
        roughness: p.number(keys::ROUGHNESS)?,
        length: p.number(keys::LENGTH)?,
        status: p.status()?,
        velocity: p.number(keys::VELOCITY)?,
        flow_rate: p.number(keys::FLOW_RATE)?,
        geometry: geometry::<LineGeometry>(Layer::Pipes, index, feature)?,
    })
}

/// Map every node feature to a `Node`, in feature order.
pub fn map_nodes(collection: &FeatureCollection) -> FeatureResult<Vec<Node>> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(i, f)| map_node(i, f))
        .collect()
}

/// Map every pipe feature to a `Pipe`, in feature order.
pub fn map_pipes(collection: &FeatureCollection) -> FeatureResult<Vec<Pipe>> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(i, f)| map_pipe(i, f))
        .collect()
}

/// Build the `Network` from the node and pipe collections.
pub fn map_network(nodes: &FeatureCollection, pipes: &FeatureCollection) -> FeatureResult<Network> {
    let nodes = map_nodes(nodes)?;
    let pipes = map_pipes(pipes)?;
    tracing::debug!(
        nodes = nodes.len(),
        pipes = pipes.len(),
        "mapped feature collections"
    );
    Ok(Network::new(nodes, pipes))
}
