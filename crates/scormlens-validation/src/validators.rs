//! Top-level validators, one per manifest format.
//!
//! Each validator fixes an ordered rule list at construction and runs
//! every rule, merging results by concatenation. No rule short-circuits:
//! validation always returns the complete diagnostic report in one pass.

use tracing::debug;

use scormlens_model::{
    AiccCourse, Cmi5CourseStructure, Scorm12Manifest, Scorm2004Manifest, TinCanManifest,
};

use crate::codes;
use crate::result::{ValidationIssue, ValidationResult};
use crate::rules::Scorm2004Rule;

/// Validator for SCORM 2004 manifests, running the full structural rule
/// pipeline
pub struct Scorm2004Validator {
    rules: Vec<Scorm2004Rule>,
}

impl Default for Scorm2004Validator {
    fn default() -> Self {
        Scorm2004Validator {
            rules: Scorm2004Rule::all(),
        }
    }
}

impl Scorm2004Validator {
    /// A validator running the full rule pipeline.
    pub fn new() -> Self {
        Scorm2004Validator::default()
    }

    /// A validator running only the given rules, in the given order.
    pub fn with_rules(rules: Vec<Scorm2004Rule>) -> Self {
        Scorm2004Validator { rules }
    }

    /// The rules this validator runs.
    pub fn rules(&self) -> &[Scorm2004Rule] {
        &self.rules
    }

    /// Validate a manifest, running every rule and merging the results.
    pub fn validate(&self, manifest: &Scorm2004Manifest) -> ValidationResult {
        let mut result = ValidationResult::valid();
        for rule in &self.rules {
            result = result.merge(rule.validate(manifest));
        }
        debug!(
            rules = self.rules.len(),
            issues = result.len(),
            valid = result.is_valid(),
            "validated SCORM 2004 manifest"
        );
        result
    }
}

/// Validator for SCORM 1.2 manifests
#[derive(Debug, Default)]
pub struct Scorm12Validator;

impl Scorm12Validator {
    /// Validate a SCORM 1.2 manifest.
    pub fn validate(&self, manifest: &Scorm12Manifest) -> ValidationResult {
        let mut result = ValidationResult::valid();

        let Some(organizations) = manifest.organizations.as_ref() else {
            result.push(ValidationIssue::error(
                codes::SCORM12_MISSING_ORGANIZATIONS,
                "manifest has no organizations element",
                "manifest",
            ));
            return self.check_launchable(manifest, result);
        };

        let default_org = organizations
            .default
            .as_deref()
            .and_then(|default| {
                organizations
                    .organizations
                    .iter()
                    .find(|org| org.identifier.as_deref() == Some(default))
            })
            .or_else(|| organizations.organizations.first());

        match default_org {
            Some(org) => {
                let titled = org
                    .title
                    .as_deref()
                    .is_some_and(|title| !title.trim().is_empty());
                if !titled {
                    result.push(ValidationIssue::error(
                        codes::SCORM12_MISSING_TITLE,
                        "default organization has no title",
                        "organizations",
                    ));
                }
            }
            None => {
                result.push(ValidationIssue::error(
                    codes::SCORM12_MISSING_ORGANIZATIONS,
                    "organizations element contains no organization",
                    "organizations",
                ));
            }
        }

        self.check_launchable(manifest, result)
    }

    fn check_launchable(
        &self,
        manifest: &Scorm12Manifest,
        mut result: ValidationResult,
    ) -> ValidationResult {
        let launchable = manifest.resources.iter().any(|resource| {
            resource
                .href
                .as_deref()
                .is_some_and(|href| !href.trim().is_empty())
        });
        if !launchable {
            result.push(ValidationIssue::error(
                codes::SCORM12_MISSING_LAUNCH_URL,
                "no resource carries a launch href",
                "resources",
            ));
        }
        result
    }
}

/// Validator for AICC course descriptor sets
#[derive(Debug, Default)]
pub struct AiccValidator;

impl AiccValidator {
    /// Validate an AICC course.
    pub fn validate(&self, course: &AiccCourse) -> ValidationResult {
        let mut result = ValidationResult::valid();

        match course.course.as_ref() {
            Some(info) => {
                let titled = info
                    .course_title
                    .as_deref()
                    .is_some_and(|title| !title.trim().is_empty());
                if !titled {
                    result.push(ValidationIssue::error(
                        codes::AICC_MISSING_TITLE,
                        "course element has no title",
                        "course",
                    ));
                }
            }
            None => {
                result.push(ValidationIssue::error(
                    codes::AICC_MISSING_COURSE,
                    "descriptor set has no course element",
                    "course",
                ));
            }
        }

        let launchable = course.assignable_units.iter().any(|au| {
            au.file_name
                .as_deref()
                .is_some_and(|file| !file.trim().is_empty())
        });
        if !launchable {
            result.push(ValidationIssue::error(
                codes::AICC_MISSING_LAUNCH_URL,
                "no assignable unit carries a launch file",
                "assignable_units",
            ));
        }

        result
    }
}

/// Validator for cmi5 course structures
#[derive(Debug, Default)]
pub struct Cmi5Validator;

impl Cmi5Validator {
    /// Validate a cmi5 course structure.
    pub fn validate(&self, structure: &Cmi5CourseStructure) -> ValidationResult {
        let mut result = ValidationResult::valid();

        match structure.course.as_ref() {
            Some(course) => {
                let titled = course
                    .title
                    .as_deref()
                    .is_some_and(|title| !title.trim().is_empty());
                if !titled {
                    result.push(ValidationIssue::error(
                        codes::CMI5_MISSING_TITLE,
                        "course element has no title",
                        "courseStructure/course",
                    ));
                }
            }
            None => {
                result.push(ValidationIssue::error(
                    codes::CMI5_MISSING_COURSE,
                    "course structure has no course element",
                    "courseStructure",
                ));
            }
        }

        let launchable = structure.all_aus().any(|au| {
            au.url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
        });
        if !launchable {
            result.push(ValidationIssue::error(
                codes::CMI5_MISSING_LAUNCH_URL,
                "no assignable unit carries a launch URL",
                "courseStructure",
            ));
        }

        result
    }
}

/// Validator for xAPI (TinCan) manifests
#[derive(Debug, Default)]
pub struct TinCanValidator;

impl TinCanValidator {
    /// Validate a tincan.xml activity list.
    pub fn validate(&self, manifest: &TinCanManifest) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if manifest.activities.is_empty() {
            result.push(ValidationIssue::error(
                codes::XAPI_MISSING_ACTIVITY,
                "manifest declares no activities",
                "tincan",
            ));
        } else if manifest.launch_activity().is_none() {
            result.push(ValidationIssue::error(
                codes::XAPI_MISSING_LAUNCH_URL,
                "no activity carries a launch path",
                "tincan/activities",
            ));
        }

        result
    }
}
