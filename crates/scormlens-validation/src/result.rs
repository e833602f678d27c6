//! Validation issue and result types.
//!
//! A [`ValidationResult`] is a monoid: merging is issue-list
//! concatenation, the empty result is the identity, and validity is
//! simply "no error-severity issues".

use serde::{Deserialize, Serialize};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Breaks the package; makes the result invalid
    Error,
    /// Best-practice violation; never affects validity
    Warning,
}

/// One structural finding against a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable code string (e.g. `SCORM2004_MISSING_ORGANIZATIONS`)
    pub code: String,
    /// Issue severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Manifest-path-like location string
    pub location: String,
    /// Optional remediation hint
    pub remediation: Option<String>,
}

impl ValidationIssue {
    /// Build an error-severity issue.
    pub fn error(code: &str, message: impl Into<String>, location: impl Into<String>) -> Self {
        ValidationIssue {
            code: code.to_string(),
            severity: Severity::Error,
            message: message.into(),
            location: location.into(),
            remediation: None,
        }
    }

    /// Build a warning-severity issue.
    pub fn warning(code: &str, message: impl Into<String>, location: impl Into<String>) -> Self {
        ValidationIssue {
            code: code.to_string(),
            severity: Severity::Warning,
            message: message.into(),
            location: location.into(),
            remediation: None,
        }
    }

    /// Attach a remediation hint.
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

/// Accumulated validation issues for one manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// The empty (valid) result, the merge identity.
    pub fn valid() -> Self {
        ValidationResult::default()
    }

    /// A result holding the given issues.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        ValidationResult { issues }
    }

    /// Append one issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Merge another result into this one by concatenating issue lists.
    /// Associative; merging with [`ValidationResult::valid`] is a no-op.
    pub fn merge(mut self, other: ValidationResult) -> ValidationResult {
        self.issues.extend(other.issues);
        self
    }

    /// `true` iff no error-severity issue is present. Warnings never
    /// affect validity.
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// All issues in the order the rules produced them.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Error-severity issues only.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    /// Warning-severity issues only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    /// Number of issues of any severity.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the result holds no issues at all.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
