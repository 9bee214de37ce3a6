//! GeoJSON geometry carried by node and pipe records.

use serde::{Deserialize, Serialize};
use wn_core::ensure_finite;

use crate::error::NetworkError;

/// A GeoJSON position: longitude/easting, latitude/northing, optional elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = NetworkError;

    fn try_from(ordinates: Vec<f64>) -> Result<Self, Self::Error> {
        for &v in &ordinates {
            ensure_finite(v, "position ordinate")?;
        }
        match ordinates.as_slice() {
            [x, y] => Ok(Self::new(*x, *y)),
            [x, y, z] => Ok(Self {
                x: *x,
                y: *y,
                z: Some(*z),
            }),
            other => Err(NetworkError::InvalidPosition { len: other.len() }),
        }
    }
}

impl From<Position> for Vec<f64> {
    fn from(p: Position) -> Self {
        match p.z {
            Some(z) => vec![p.x, p.y, z],
            None => vec![p.x, p.y],
        }
    }
}

/// Geometry of a node record: a single point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum PointGeometry {
    Point(Position),
}

impl PointGeometry {
    pub fn position(&self) -> Position {
        match self {
            PointGeometry::Point(p) => *p,
        }
    }
}

/// Geometry of a pipe record: one path or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum LineGeometry {
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
}

impl LineGeometry {
    /// Iterate over the constituent paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &[Position]> {
        let paths: Vec<&[Position]> = match self {
            LineGeometry::LineString(path) => vec![path.as_slice()],
            LineGeometry::MultiLineString(paths) => paths.iter().map(Vec::as_slice).collect(),
        };
        paths.into_iter()
    }

    /// Total number of vertices across all paths.
    pub fn vertex_count(&self) -> usize {
        self.paths().map(<[Position]>::len).sum()
    }
}
