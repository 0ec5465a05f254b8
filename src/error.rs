//! Error types for record validation, ingestion, and persistence.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum NotetreeError {
    /// A record path violates the segment rules (empty path or empty segment)
    #[error("Invalid record path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotetreeError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        NotetreeError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for NotetreeError {
    fn from(err: config::ConfigError) -> Self {
        NotetreeError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotetreeError>;
