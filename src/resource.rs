//! Pluggable resource access backends

use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage seam for lang file bytes.
///
/// Implementations decide the backend; the resolver never assumes more than
/// "stream or absent". A blank path yields `None`.
pub trait ResourceAccess: Send + Sync {
    /// Open the resource at `path`, if present.
    fn open(&self, path: &str) -> Option<Box<dyn Read + Send>>;
}

fn normalize(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Filesystem-backed resource access anchored at a base directory.
#[derive(Debug, Clone)]
pub struct FsResourceAccess {
    base_dir: PathBuf,
}

impl FsResourceAccess {
    /// Create an access rooted at `base_dir`.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory resource paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ResourceAccess for FsResourceAccess {
    fn open(&self, path: &str) -> Option<Box<dyn Read + Send>> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let full = self.base_dir.join(normalize(path));
        match File::open(&full) {
            Ok(file) => Some(Box::new(file)),
            Err(_) => {
                debug!(path = %full.display(), "resource not found");
                None
            }
        }
    }
}

/// In-memory resource access for embedded bundles and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticResourceAccess {
    files: HashMap<String, Vec<u8>>,
}

impl StaticResourceAccess {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path`, replacing any previous entry.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        self.files
            .insert(normalize(&path).to_string(), content.into());
        self
    }
}

impl ResourceAccess for StaticResourceAccess {
    fn open(&self, path: &str) -> Option<Box<dyn Read + Send>> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        self.files
            .get(normalize(path))
            .map(|bytes| Box::new(Cursor::new(bytes.clone())) as Box<dyn Read + Send>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_to_string(mut stream: Box<dyn Read + Send>) -> String {
        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_static_access_serves_registered_file() {
        let access = StaticResourceAccess::new().with_file("lang/en.properties", "a=b\n");
        let stream = access.open("lang/en.properties").unwrap();
        assert_eq!(read_to_string(stream), "a=b\n");
    }

    #[test]
    fn test_static_access_normalizes_leading_slash() {
        let access = StaticResourceAccess::new().with_file("/lang/en.properties", "a=b\n");
        assert!(access.open("lang/en.properties").is_some());
        assert!(access.open("/lang/en.properties").is_some());
    }

    #[test]
    fn test_blank_path_yields_none() {
        let access = StaticResourceAccess::new().with_file("lang/en.properties", "a=b\n");
        assert!(access.open("").is_none());
        assert!(access.open("   ").is_none());
    }

    #[test]
    fn test_missing_path_yields_none() {
        let access = StaticResourceAccess::new();
        assert!(access.open("lang/en.properties").is_none());
    }

    #[test]
    fn test_fs_access_missing_file_yields_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let access = FsResourceAccess::new(dir.path());
        assert!(access.open("lang/en.properties").is_none());
    }

    #[test]
    fn test_fs_access_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("lang")).unwrap();
        std::fs::write(dir.path().join("lang/en.properties"), "a=b\n").unwrap();

        let access = FsResourceAccess::new(dir.path());
        let stream = access.open("/lang/en.properties").unwrap();
        assert_eq!(read_to_string(stream), "a=b\n");
    }
}
