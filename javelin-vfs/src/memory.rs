//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system implementation.
///
/// All files live in a `BTreeMap` behind a lock. This is the backing
/// store for compilation tasks: sources are written once when added and
/// read back when the compiler first touches their unit.
///
/// # Example
/// ```
/// use javelin_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.write_file(Path::new("/src/A.java"), b"class A {}").unwrap();
/// assert!(fs.exists(Path::new("/src/A.java")));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a new memory file system pre-populated with files.
    ///
    /// # Arguments
    /// * `files` - Iterator of (path, content) tuples
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        {
            let mut map = fs.files.write().unwrap();
            for (path, content) in files {
                map.insert(path.as_ref().to_string(), content);
            }
        }
        fs
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize a path string for internal storage.
    /// Uses forward slashes consistently for cross-platform compatibility.
    fn normalize_path(&self, path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = self.normalize_path(path);
        let files = self.files.read().map_err(|_| VfsError::Custom {
            message: String::from("Lock poisoned"),
        })?;

        files
            .get(&normalized)
            .cloned()
            .ok_or_else(|| VfsError::NotFound { path: normalized })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = self.normalize_path(path);
        let mut files = self.files.write().map_err(|_| VfsError::Custom {
            message: String::from("Lock poisoned"),
        })?;
        files.insert(normalized, content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = self.normalize_path(path);
        let files = match self.files.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        files.contains_key(&normalized)
    }
}
