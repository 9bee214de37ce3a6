//! wn-network: record layer for waternet.
//!
//! Provides:
//! - Flat `Node` and `Pipe` records mapped from feature properties
//! - GeoJSON point/line geometry types
//! - The immutable `Network` value holding both collections
//! - A diagnostic audit of pipe endpoint references
//!
//! # Example
//!
//! ```
//! use wn_network::{Network, Node, Pipe};
//!
//! let network = Network::new(vec![Node::default()], vec![Pipe::default()]);
//!
//! assert_eq!(network.nodes().len(), 1);
//! assert_eq!(network.pipes().len(), 1);
//! ```

pub mod audit;
pub mod error;
pub mod geometry;
pub mod network;
pub mod record;

// Re-exports for ergonomics
pub use audit::{DanglingReference, PipeEnd, ReferenceReport, audit_references};
pub use error::NetworkError;
pub use geometry::{LineGeometry, PointGeometry, Position};
pub use network::Network;
pub use record::{Node, Pipe};
