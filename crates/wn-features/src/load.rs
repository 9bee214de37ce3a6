//! Loading feature collections from text and files.

use std::path::Path;

use wn_network::Network;

use crate::mapping::map_network;
use crate::schema::FeatureCollection;
use crate::{FeatureError, FeatureResult};

/// Web-map exports wrap the GeoJSON in a script assignment,
/// e.g. `var json_harare_nodes2_2 = {...};`. Return the object literal.
fn strip_js_assignment(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(brace) = trimmed.find('{') else {
        return trimmed;
    };
    if !trimmed[..brace].trim_end().ends_with('=') {
        return trimmed;
    }
    trimmed[brace..].trim_end().trim_end_matches(';').trim_end()
}

/// Parse a feature collection from GeoJSON text or a script-wrapped export.
pub fn parse_collection(text: &str) -> FeatureResult<FeatureCollection> {
    let collection: FeatureCollection = serde_json::from_str(strip_js_assignment(text))?;
    Ok(collection)
}

/// Read and parse a feature collection file.
pub fn load_collection(path: &Path) -> FeatureResult<FeatureCollection> {
    let content = std::fs::read_to_string(path).map_err(|e| FeatureError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let collection = parse_collection(&content)?;
    tracing::debug!(
        path = %path.display(),
        features = collection.features.len(),
        "loaded feature collection"
    );
    Ok(collection)
}

/// Load both source files and map them into a `Network`.
pub fn load_network(nodes_path: &Path, pipes_path: &Path) -> FeatureResult<Network> {
    let nodes = load_collection(nodes_path)?;
    let pipes = load_collection(pipes_path)?;
    map_network(&nodes, &pipes)
}
