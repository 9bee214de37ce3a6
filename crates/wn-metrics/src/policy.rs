//! High-priority thresholds and their YAML configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use wn_core::ensure_finite;

use crate::error::{MetricsError, MetricsResult};

/// A faulty node above this pressure is a high-priority issue.
pub const DEFAULT_NODE_PRESSURE_THRESHOLD: f64 = 30.0;

/// A faulty pipe above this flow rate is a high-priority issue.
pub const DEFAULT_PIPE_FLOW_RATE_THRESHOLD: f64 = 1.5;

/// Thresholds used to pick high-priority assets among faulty ones.
///
/// Both comparisons are strict (`>`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityPolicy {
    pub node_pressure_threshold: f64,
    pub pipe_flow_rate_threshold: f64,
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            node_pressure_threshold: DEFAULT_NODE_PRESSURE_THRESHOLD,
            pipe_flow_rate_threshold: DEFAULT_PIPE_FLOW_RATE_THRESHOLD,
        }
    }
}

impl PriorityPolicy {
    pub fn validate(&self) -> MetricsResult<()> {
        ensure_finite(self.node_pressure_threshold, "node_pressure_threshold")?;
        ensure_finite(self.pipe_flow_rate_threshold, "pipe_flow_rate_threshold")?;
        Ok(())
    }
}

/// Parse a policy from YAML. Missing keys keep their defaults.
pub fn parse_policy(content: &str) -> MetricsResult<PriorityPolicy> {
    let is_blank = content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    let policy = if is_blank {
        PriorityPolicy::default()
    } else {
        serde_yaml::from_str(content)?
    };
    policy.validate()?;
    Ok(policy)
}

/// Load a policy from a YAML file.
pub fn load_policy(path: &Path) -> MetricsResult<PriorityPolicy> {
    let content = std::fs::read_to_string(path).map_err(|e| MetricsError::PolicyRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let policy = parse_policy(&content)?;
    tracing::debug!(path = %path.display(), ?policy, "loaded priority policy");
    Ok(policy)
}
