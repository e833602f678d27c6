//! cmi5 course-structure object model.

use serde::{Deserialize, Serialize};

/// A parsed cmi5 course structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cmi5CourseStructure {
    /// The course element
    pub course: Option<Cmi5Course>,
    /// Top-level blocks
    pub blocks: Vec<Cmi5Block>,
    /// Top-level assignable units
    pub aus: Vec<Cmi5Au>,
}

impl Cmi5CourseStructure {
    /// Iterate every assignable unit, top-level and inside blocks.
    pub fn all_aus(&self) -> impl Iterator<Item = &Cmi5Au> {
        self.aus
            .iter()
            .chain(self.blocks.iter().flat_map(|block| block.aus.iter()))
    }
}

/// cmi5 course element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cmi5Course {
    /// Course identifier (IRI)
    pub id: Option<String>,
    /// Course title
    pub title: Option<String>,
    /// Course description
    pub description: Option<String>,
}

/// cmi5 block grouping assignable units
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cmi5Block {
    /// Block identifier (IRI)
    pub id: Option<String>,
    /// Block title
    pub title: Option<String>,
    /// Assignable units inside this block
    pub aus: Vec<Cmi5Au>,
}

/// cmi5 assignable unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cmi5Au {
    /// Assignable-unit identifier (IRI)
    pub id: Option<String>,
    /// Unit title
    pub title: Option<String>,
    /// Launch URL
    pub url: Option<String>,
    /// Launch method ("OwnWindow" or "AnyWindow")
    pub launch_method: Option<String>,
    /// Criterion for moving past this unit
    pub move_on: Option<String>,
    /// Mastery score in [0, 1]
    pub mastery_score: Option<f64>,
}
