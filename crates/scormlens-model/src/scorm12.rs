//! SCORM 1.2 manifest object model.
//!
//! SCORM 1.2 predates the sequencing data model, so its manifest is the
//! organization/resource skeleton only.

use serde::{Deserialize, Serialize};

/// Root of a SCORM 1.2 content-package manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorm12Manifest {
    /// Manifest identifier
    pub identifier: Option<String>,
    /// Manifest version string
    pub version: Option<String>,
    /// Schema version declared by the package (e.g. "1.2")
    pub schema_version: Option<String>,
    /// Organizations element
    pub organizations: Option<Scorm12Organizations>,
    /// Resources in document order
    pub resources: Vec<Scorm12Resource>,
}

/// SCORM 1.2 organizations element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorm12Organizations {
    /// Identifier of the default organization
    pub default: Option<String>,
    /// The organizations in document order
    pub organizations: Vec<Scorm12Organization>,
}

/// One SCORM 1.2 content hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorm12Organization {
    /// Organization identifier
    pub identifier: Option<String>,
    /// Human-readable title
    pub title: Option<String>,
    /// Top-level items in document order
    pub items: Vec<Scorm12Item>,
}

/// Node in a SCORM 1.2 content hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorm12Item {
    /// Item identifier
    pub identifier: Option<String>,
    /// Reference to a resource
    pub identifier_ref: Option<String>,
    /// Human-readable title
    pub title: Option<String>,
    /// Mastery score for this item
    pub mastery_score: Option<f64>,
    /// Nested child items
    pub items: Vec<Scorm12Item>,
}

/// A SCORM 1.2 resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorm12Resource {
    /// Resource identifier
    pub identifier: Option<String>,
    /// SCORM content type ("sco" or "asset")
    pub scorm_type: Option<String>,
    /// Launch path relative to the package root
    pub href: Option<String>,
}
