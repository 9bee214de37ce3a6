//! Error type for the wn-cli binary.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Features(#[from] wn_features::FeatureError),

    #[error(transparent)]
    Metrics(#[from] wn_metrics::MetricsError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML output error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type CliResult<T> = Result<T, CliError>;
