//! xAPI (TinCan) manifest object model.

use serde::{Deserialize, Serialize};

/// A parsed tincan.xml activity list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TinCanManifest {
    /// Declared activities in document order
    pub activities: Vec<TinCanActivity>,
}

impl TinCanManifest {
    /// The first activity with a launch path, if any.
    pub fn launch_activity(&self) -> Option<&TinCanActivity> {
        self.activities.iter().find(|activity| {
            activity
                .launch
                .as_deref()
                .is_some_and(|launch| !launch.trim().is_empty())
        })
    }
}

/// One xAPI activity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TinCanActivity {
    /// Activity identifier (IRI)
    pub id: Option<String>,
    /// Activity type IRI
    pub activity_type: Option<String>,
    /// Activity name
    pub name: Option<String>,
    /// Launch path relative to the package root
    pub launch: Option<String>,
}
