//! Dashboard statistics over a mapped water network.
//!
//! Derives status counts, averages, network health, and high-priority
//! issue lists from a [`wn_network::Network`], and extracts faulty assets
//! for reporting. Everything here is recomputed on each call.

pub mod error;
pub mod faults;
pub mod metrics;
pub mod policy;

// Re-export key types for convenience
pub use error::{MetricsError, MetricsResult};
pub use faults::{FaultyAssets, get_faulty_assets};
pub use metrics::{NetworkMetrics, StatusCounts, calculate_metrics, calculate_metrics_with};
pub use policy::{
    DEFAULT_NODE_PRESSURE_THRESHOLD, DEFAULT_PIPE_FLOW_RATE_THRESHOLD, PriorityPolicy,
    load_policy, parse_policy,
};
