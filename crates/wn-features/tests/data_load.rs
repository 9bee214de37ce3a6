//! Loads the bundled sample layers from `data/`.

use std::path::PathBuf;
use wn_features::{load_collection, load_network, parse_collection};
use wn_core::Measure;
use wn_network::Position;

fn data_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("data");
    path.push(name);
    path
}

#[test]
fn load_sample_layers() {
    let network = load_network(
        &data_path("harare_nodes.geojson"),
        &data_path("harare_pipes.js"),
    )
    .expect("Failed to load sample network");

    assert_eq!(network.nodes().len(), 5);
    assert_eq!(network.pipes().len(), 4);

    let statuses: Vec<&str> = network.nodes().iter().map(|n| n.status.as_str()).collect();
    assert_eq!(statuses, vec!["faulty", "normal", "normal", "faulty", "unknown"]);

    let n1 = network.node("N1").expect("N1 present");
    assert_eq!(n1.id.as_deref(), Some("N1"));
    assert_eq!(n1.pressure, Measure::Value(42.5));
    assert_eq!(n1.node_degre, Measure::Value(2.0));
    assert_eq!(
        n1.geometry.as_ref().map(|g| g.position()),
        Some(Position::new(31.0522, -17.8292))
    );

    let n5 = network.node("N5").expect("N5 present");
    assert_eq!(n5.p_name, None);
    assert_eq!(n5.elevation_y, Measure::Null);
    assert_eq!(n5.status.as_str(), "unknown");

    let p1 = network.pipe("P1").expect("P1 present");
    assert_eq!(p1.velocity, Measure::Value(1.31));
    assert_eq!(p1.start_node.as_deref(), Some("N1"));
    assert_eq!(p1.end_node_n.as_deref(), Some("N2"));
}

#[test]
fn script_wrapped_and_bare_json_parse_the_same() {
    let wrapped = std::fs::read_to_string(data_path("harare_pipes.js")).unwrap();
    let bare = wrapped
        .trim()
        .trim_start_matches("var json_harare_pipes_1 =")
        .trim_end_matches(';');

    let a = parse_collection(&wrapped).unwrap();
    let b = parse_collection(bare).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.features.len(), 4);
}

#[test]
fn collection_order_is_source_order() {
    let fc = load_collection(&data_path("harare_nodes.geojson")).unwrap();
    let nodes = wn_features::map_nodes(&fc).unwrap();
    let ids: Vec<&str> = nodes.iter().filter_map(|n| n.node_id.as_deref()).collect();
    assert_eq!(ids, vec!["N1", "N2", "N3", "N4", "N5"]);
}

#[test]
fn node_layer_does_not_map_as_pipes() {
    // Point geometry is not a line.
    let fc = load_collection(&data_path("harare_nodes.geojson")).unwrap();
    let err = wn_features::map_pipes(&fc).unwrap_err();
    assert!(err.to_string().contains("pipes feature 0: invalid geometry"));
}
