#![warn(missing_docs)]

//! Scormlens Validation Engine
//!
//! A composable pipeline of independent structural rules over parsed
//! manifest models. Every rule is a pure function from a manifest to a
//! [`ValidationResult`]; validators run every rule and concatenate the
//! issues, so one pass yields the complete diagnostic report. Rules never
//! throw for data problems: malformed-but-present structure degrades to
//! issues, and absent structure is tolerated.

pub mod codes;
pub mod paths;
pub mod result;
pub mod rules;
pub mod validators;

pub use paths::classify_unsafe_path;
pub use result::{Severity, ValidationIssue, ValidationResult};
pub use rules::Scorm2004Rule;
pub use validators::{
    AiccValidator, Cmi5Validator, Scorm12Validator, Scorm2004Validator, TinCanValidator,
};
