//! Javelin Virtual File System
//!
//! A small virtual file system abstraction backing Javelin's in-memory
//! source stores. Compilation runs keep every source text in memory;
//! this crate provides the store they read through.
//!
//! # Usage
//! ```
//! use javelin_vfs::{VirtualFileSystem, MemoryFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/src/Main.java"), b"class Main {}").unwrap();
//! let text = fs.read_to_string(Path::new("/src/Main.java")).unwrap();
//! assert!(text.starts_with("class"));
//! ```

mod error;
mod memory;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use r#trait::VirtualFileSystem;

/// Create a new memory-based file system.
pub fn memory_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
}
