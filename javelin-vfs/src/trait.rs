//! VirtualFileSystem trait definition

use crate::error::{VfsError, VfsResult};
use std::path::Path;

/// Virtual File System trait
///
/// Provides a unified interface for the file operations Javelin needs,
/// decoupling the compilation layers from any concrete storage.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
pub trait VirtualFileSystem: Send + Sync {
    /// Read file contents as raw bytes
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Write file contents
    ///
    /// Creates the file if it doesn't exist, truncates it if it does.
    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8 text
    ///
    /// Source texts are always UTF-8; non-UTF-8 content is an error,
    /// not a lossy conversion.
    fn read_to_string(&self, path: &Path) -> VfsResult<String> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes).map_err(|_| VfsError::NotUtf8 {
            path: path.to_string_lossy().into_owned(),
        })
    }
}
