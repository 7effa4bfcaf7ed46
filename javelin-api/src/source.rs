//! Source handles backed by the task's source store

use std::path::PathBuf;
use std::sync::Arc;

use javelin_core::{SourceError, SourceHandle};
use javelin_vfs::{VfsError, VirtualFileSystem};

/// A source handle reading through a virtual file system.
///
/// The read happens when the compilation run first touches the unit,
/// not when the handle is built, and the bookkeeping layer performs it
/// at most once per unit.
pub struct VfsSource {
    name: String,
    path: PathBuf,
    fs: Arc<dyn VirtualFileSystem>,
}

impl VfsSource {
    pub fn new(name: String, path: PathBuf, fs: Arc<dyn VirtualFileSystem>) -> Self {
        Self { name, path, fs }
    }
}

impl SourceHandle for VfsSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> Result<String, SourceError> {
        self.fs.read_to_string(&self.path).map_err(|err| match err {
            VfsError::NotFound { path } => SourceError::NotFound { name: path },
            VfsError::NotUtf8 { path } => SourceError::NotUtf8 { name: path },
            other => SourceError::Other(other.to_string()),
        })
    }
}
