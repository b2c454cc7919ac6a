//! Version data errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid version string: {0:?}")]
    InvalidVersion(String),

    #[error("no bundled data for version {0}")]
    UnknownVersion(String),

    #[error("version data JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read version data: {0}")]
    Io(#[from] std::io::Error),
}
