//! Record-layer error types.

use wn_core::CoreError;

/// Errors raised while building geometry values.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A position has fewer than 2 or more than 3 ordinates.
    InvalidPosition { len: usize },

    /// An ordinate is NaN or infinite.
    NonFiniteCoordinate(CoreError),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::InvalidPosition { len } => {
                write!(f, "Position has {} ordinates (expected 2 or 3)", len)
            }
            NetworkError::NonFiniteCoordinate(err) => write!(f, "Invalid coordinate: {}", err),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<CoreError> for NetworkError {
    fn from(err: CoreError) -> Self {
        NetworkError::NonFiniteCoordinate(err)
    }
}
