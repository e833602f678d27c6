//! Loaders for JSON and YAML manifest renditions.
//!
//! The analysis core consumes the in-memory object graph; these loaders
//! are the bundled way of materializing one from text. An XML binding can
//! be layered on externally by any consumer that needs it.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ModelError;

/// JSON loader for manifest models
pub struct JsonParser;

impl JsonParser {
    /// Parse a manifest model from a JSON string
    pub fn parse<T: DeserializeOwned>(content: &str) -> Result<T, ModelError> {
        serde_json::from_str(content).map_err(ModelError::JsonError)
    }

    /// Serialize a manifest model to pretty-printed JSON
    pub fn serialize<T: Serialize>(model: &T) -> Result<String, ModelError> {
        serde_json::to_string_pretty(model).map_err(ModelError::JsonError)
    }
}

/// YAML loader for manifest models
pub struct YamlParser;

impl YamlParser {
    /// Parse a manifest model from a YAML string
    pub fn parse<T: DeserializeOwned>(content: &str) -> Result<T, ModelError> {
        serde_yaml::from_str(content).map_err(ModelError::YamlError)
    }

    /// Serialize a manifest model to YAML
    pub fn serialize<T: Serialize>(model: &T) -> Result<String, ModelError> {
        serde_yaml::to_string(model).map_err(ModelError::YamlError)
    }
}
