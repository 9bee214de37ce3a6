//! wn-features: feature-collection input format and mapping to records.

pub mod load;
pub mod mapping;
pub mod schema;

pub use load::{load_collection, load_network, parse_collection};
pub use mapping::{map_network, map_nodes, map_pipes};
pub use schema::{Feature, FeatureCollection};

use std::path::PathBuf;

pub type FeatureResult<T> = Result<T, FeatureError>;

/// Which of the two source collections a feature came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Nodes,
    Pipes,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Nodes => write!(f, "nodes"),
            Layer::Pipes => write!(f, "pipes"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FeatureError {
    #[error("{layer} feature {index} has no properties object")]
    MissingProperties { layer: Layer, index: usize },

    #[error("{layer} feature {index}: property `{key}` is not a {expected}")]
    InvalidProperty {
        layer: Layer,
        index: usize,
        key: &'static str,
        expected: &'static str,
    },

    #[error("{layer} feature {index}: invalid geometry ({reason})")]
    InvalidGeometry {
        layer: Layer,
        index: usize,
        reason: String,
    },

    #[error("Failed to read feature collection: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
