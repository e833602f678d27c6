//! Launch-path safety classification.
//!
//! Paths inside a package must stay relative and inside the package.
//! Categories are checked in a fixed priority order so exactly one code
//! fires per offending path: traversal, then absolute, then external URL,
//! then embedded null byte.

use regex::Regex;

use crate::codes;

/// Classify an unsafe path, returning the issue code and a message.
/// Returns `None` for a safe, package-relative path.
pub fn classify_unsafe_path(path: &str) -> Option<(&'static str, String)> {
    if path.contains("../") || path.contains("..\\") {
        return Some((
            codes::UNSAFE_PATH_TRAVERSAL,
            format!("path '{}' contains a directory traversal sequence", printable(path)),
        ));
    }

    // A protocol-relative "//" prefix is an external reference, not an
    // absolute path; it is handled by the next category.
    let absolute = (path.starts_with('/') && !path.starts_with("//")) || path.starts_with('\\');
    let drive_letter = Regex::new(r"^[A-Za-z]:").map(|re| re.is_match(path)).unwrap_or(false);
    if absolute || drive_letter {
        return Some((
            codes::UNSAFE_ABSOLUTE_PATH,
            format!("path '{}' is absolute", printable(path)),
        ));
    }

    let lower = path.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || path.starts_with("//") {
        return Some((
            codes::UNSAFE_EXTERNAL_URL,
            format!("path '{}' points outside the package", printable(path)),
        ));
    }

    if path.contains('\0') {
        return Some((
            codes::UNSAFE_NULL_BYTE,
            format!("path '{}' contains an embedded null byte", printable(path)),
        ));
    }

    None
}

/// Strip null bytes before interpolating a path into a message.
fn printable(path: &str) -> String {
    path.replace('\0', "\\0")
}
