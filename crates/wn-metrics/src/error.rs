//! Error types for wn-metrics.

use std::path::PathBuf;

use wn_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to read policy file: {path}")]
    PolicyRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(#[from] CoreError),
}

/// Result type for wn-metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
