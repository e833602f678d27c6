//! Module-type detection by file presence.
//!
//! A priority-ordered sniffing chain: the first marker file found decides
//! the format. cmi5 and tincan markers outrank imsmanifest.xml because
//! packages exported for multiple runtimes often ship both.

use tracing::debug;

use crate::source::PackageSource;

/// Supported content-package formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
    /// cmi5 course package
    Cmi5,
    /// xAPI (TinCan) package
    Xapi,
    /// SCORM 2004 package
    Scorm2004,
    /// SCORM 1.2 package
    Scorm12,
    /// AICC course package
    Aicc,
}

/// Detect the module type of a package, or `None` when no marker file is
/// present.
pub fn detect_module_type(source: &dyn PackageSource) -> Option<ModuleType> {
    if source.exists("cmi5.xml") {
        debug!("detected cmi5 package");
        return Some(ModuleType::Cmi5);
    }
    if source.exists("tincan.xml") {
        debug!("detected xAPI package");
        return Some(ModuleType::Xapi);
    }
    if source.exists("imsmanifest.xml") {
        // The schemaversion element distinguishes the SCORM editions; a
        // plain substring check avoids committing to any XML binding here.
        let is_2004 = source
            .read("imsmanifest.xml")
            .ok()
            .map(|bytes| String::from_utf8_lossy(&bytes).contains("2004"))
            .unwrap_or(false);
        let detected = if is_2004 {
            ModuleType::Scorm2004
        } else {
            ModuleType::Scorm12
        };
        debug!(?detected, "detected SCORM package");
        return Some(detected);
    }
    let has_crs = source
        .list("")
        .ok()
        .is_some_and(|entries| entries.iter().any(|entry| entry.ends_with(".crs")));
    if has_crs {
        debug!("detected AICC package");
        return Some(ModuleType::Aicc);
    }
    None
}
