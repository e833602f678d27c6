//! Error types for manifest model loading

use std::io;

use thiserror::Error;

/// Errors that can occur while loading a manifest model
#[derive(Debug, Error)]
pub enum ModelError {
    /// Manifest content is not in a recognized format
    #[error("Invalid manifest format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
