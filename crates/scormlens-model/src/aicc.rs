//! AICC course object model.
//!
//! Covers the fields of the `.crs`/`.au` descriptor pair that validation
//! and metadata extraction need; the full HACP descriptor set is out of
//! scope.

use serde::{Deserialize, Serialize};

/// A parsed AICC course (course descriptor plus assignable units)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiccCourse {
    /// The course descriptor block
    pub course: Option<AiccCourseInfo>,
    /// Assignable units in descriptor order
    pub assignable_units: Vec<AiccAssignableUnit>,
}

/// AICC course descriptor fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiccCourseInfo {
    /// Course identifier
    pub course_id: Option<String>,
    /// Course title
    pub course_title: Option<String>,
    /// Course creator
    pub course_creator: Option<String>,
    /// Declared number of assignable units
    pub total_aus: Option<u32>,
    /// Declared number of blocks
    pub total_blocks: Option<u32>,
    /// AICC level ("1".."4")
    pub level: Option<String>,
}

/// One AICC assignable unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiccAssignableUnit {
    /// System-assigned unit identifier
    pub system_id: Option<String>,
    /// Launch file name or URL
    pub file_name: Option<String>,
    /// Maximum score the unit reports
    pub max_score: Option<f64>,
    /// Mastery score for the unit
    pub mastery_score: Option<f64>,
    /// Web launch parameters
    pub web_launch: Option<String>,
}
