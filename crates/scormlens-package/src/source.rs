//! Package source backends.
//!
//! A [`PackageSource`] hands out package-relative files. The local
//! directory backend rejects paths that resolve outside its root; the
//! in-memory backend exists for tests and for callers that already hold
//! the package contents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{PackageError, PackageResult};

/// Read access to the files of one content package
pub trait PackageSource: Send + Sync {
    /// Whether a package-relative path exists.
    fn exists(&self, path: &str) -> bool;

    /// Read a package-relative file.
    fn read(&self, path: &str) -> PackageResult<Vec<u8>>;

    /// List the entries of a package-relative directory. An empty string
    /// lists the package root.
    fn list(&self, dir: &str) -> PackageResult<Vec<String>>;
}

/// Package source backed by a directory on the local filesystem
pub struct LocalDirSource {
    root: PathBuf,
}

impl LocalDirSource {
    /// A source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalDirSource { root: root.into() }
    }

    /// Resolve a package-relative path, rejecting anything that would
    /// escape the root.
    fn resolve(&self, path: &str) -> PackageResult<PathBuf> {
        let relative = Path::new(path);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(PackageError::OutsidePackage(path.to_string()));
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

impl PackageSource for LocalDirSource {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|full| full.exists()).unwrap_or(false)
    }

    fn read(&self, path: &str) -> PackageResult<Vec<u8>> {
        let full = self.resolve(path)?;
        if !full.is_file() {
            return Err(PackageError::NotFound(path.to_string()));
        }
        debug!(path, "reading package file");
        Ok(fs::read(full)?)
    }

    fn list(&self, dir: &str) -> PackageResult<Vec<String>> {
        let full = self.resolve(dir)?;
        let mut entries = Vec::new();
        for entry in fs::read_dir(full)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }
}

/// Package source backed by an in-memory map of path to contents
#[derive(Debug, Default)]
pub struct InMemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

impl InMemorySource {
    /// An empty in-memory package.
    pub fn new() -> Self {
        InMemorySource::default()
    }

    /// Add a file, replacing any previous contents at that path.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl PackageSource for InMemorySource {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> PackageResult<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| PackageError::NotFound(path.to_string()))
    }

    fn list(&self, dir: &str) -> PackageResult<Vec<String>> {
        let prefix = if dir.is_empty() || dir.ends_with('/') {
            dir.to_string()
        } else {
            format!("{dir}/")
        };
        let mut entries: Vec<String> = self
            .files
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .map(|rest| match rest.split_once('/') {
                Some((first, _)) => first.to_string(),
                None => rest.to_string(),
            })
            .collect();
        entries.sort();
        entries.dedup();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_read_and_exists() {
        let mut source = InMemorySource::new();
        source.insert("imsmanifest.xml", b"<manifest/>".to_vec());

        assert!(source.exists("imsmanifest.xml"));
        assert!(!source.exists("missing.xml"));
        assert_eq!(source.read("imsmanifest.xml").unwrap(), b"<manifest/>");
        assert!(matches!(
            source.read("missing.xml"),
            Err(PackageError::NotFound(_))
        ));
    }

    #[test]
    fn test_in_memory_list_top_level() {
        let mut source = InMemorySource::new();
        source.insert("imsmanifest.xml", b"x".to_vec());
        source.insert("content/page.html", b"x".to_vec());
        source.insert("content/style.css", b"x".to_vec());

        assert_eq!(source.list("").unwrap(), vec!["content", "imsmanifest.xml"]);
        assert_eq!(
            source.list("content").unwrap(),
            vec!["page.html", "style.css"]
        );
    }

    #[test]
    fn test_local_dir_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("course.crs"), b"[Course]").unwrap();

        let source = LocalDirSource::new(dir.path());
        assert!(source.exists("course.crs"));
        assert_eq!(source.read("course.crs").unwrap(), b"[Course]");
        assert_eq!(source.list("").unwrap(), vec!["course.crs"]);
    }

    #[test]
    fn test_local_dir_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalDirSource::new(dir.path());

        assert!(!source.exists("../outside.txt"));
        assert!(matches!(
            source.read("../outside.txt"),
            Err(PackageError::OutsidePackage(_))
        ));
        assert!(matches!(
            source.read("/etc/passwd"),
            Err(PackageError::OutsidePackage(_))
        ));
    }
}
