//! Stable issue code strings.
//!
//! Codes are part of the public contract: LMS integrations key off them,
//! so they never change once shipped.

/// Manifest has no organizations element
pub const SCORM2004_MISSING_ORGANIZATIONS: &str = "SCORM2004_MISSING_ORGANIZATIONS";
/// Default-organization pointer does not resolve
pub const SCORM2004_INVALID_DEFAULT_ORG: &str = "SCORM2004_INVALID_DEFAULT_ORG";
/// Item identifierRef does not resolve to a resource
pub const SCORM2004_MISSING_RESOURCE_REF: &str = "SCORM2004_MISSING_RESOURCE_REF";
/// Referenced resource has no launch href
pub const SCORM2004_MISSING_LAUNCH_URL: &str = "SCORM2004_MISSING_LAUNCH_URL";
/// An identifier value is used by more than one element
pub const DUPLICATE_IDENTIFIER: &str = "DUPLICATE_IDENTIFIER";
/// A resource is never referenced by any item
pub const ORPHANED_RESOURCE: &str = "ORPHANED_RESOURCE";
/// Path contains a traversal sequence
pub const UNSAFE_PATH_TRAVERSAL: &str = "UNSAFE_PATH_TRAVERSAL";
/// Path is absolute
pub const UNSAFE_ABSOLUTE_PATH: &str = "UNSAFE_ABSOLUTE_PATH";
/// Path points at an external URL
pub const UNSAFE_EXTERNAL_URL: &str = "UNSAFE_EXTERNAL_URL";
/// Path contains an embedded null byte
pub const UNSAFE_NULL_BYTE: &str = "UNSAFE_NULL_BYTE";

/// SCORM 1.2 manifest has no organizations element
pub const SCORM12_MISSING_ORGANIZATIONS: &str = "SCORM12_MISSING_ORGANIZATIONS";
/// SCORM 1.2 default organization has no title
pub const SCORM12_MISSING_TITLE: &str = "SCORM12_MISSING_TITLE";
/// SCORM 1.2 package has no launchable resource
pub const SCORM12_MISSING_LAUNCH_URL: &str = "SCORM12_MISSING_LAUNCH_URL";

/// AICC descriptor set has no course element
pub const AICC_MISSING_COURSE: &str = "AICC_MISSING_COURSE";
/// AICC course has no title
pub const AICC_MISSING_TITLE: &str = "AICC_MISSING_TITLE";
/// AICC course has no launchable assignable unit
pub const AICC_MISSING_LAUNCH_URL: &str = "AICC_MISSING_LAUNCH_URL";

/// cmi5 structure has no course element
pub const CMI5_MISSING_COURSE: &str = "CMI5_MISSING_COURSE";
/// cmi5 course has no title
pub const CMI5_MISSING_TITLE: &str = "CMI5_MISSING_TITLE";
/// cmi5 structure has no assignable unit with a launch URL
pub const CMI5_MISSING_LAUNCH_URL: &str = "CMI5_MISSING_LAUNCH_URL";

/// tincan.xml declares no activities
pub const XAPI_MISSING_ACTIVITY: &str = "XAPI_MISSING_ACTIVITY";
/// No xAPI activity carries a launch path
pub const XAPI_MISSING_LAUNCH_URL: &str = "XAPI_MISSING_LAUNCH_URL";
