//! Compiled class artifacts
//!
//! An artifact is one compiled type: a binary name plus an opaque blob
//! of class-file bytes. The blob is streamed in by the compiler through
//! an [`ArtifactSink`] while the bookkeeping layer already holds a
//! handle to the same buffer.

use std::io::{self, Write};
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct ArtifactInner {
    binary_name: String,
    simple_name: String,
    bytes: RwLock<Vec<u8>>,
}

/// A single compiled type: a named, opaque binary blob.
///
/// Cheap to clone; all clones share one byte buffer. The compiler
/// writes the bytes through the unit's [`ArtifactSink`] before its
/// output callback completes, and the artifact is treated as immutable
/// from then on.
#[derive(Debug, Clone)]
pub struct CompiledArtifact {
    inner: Arc<ArtifactInner>,
}

impl CompiledArtifact {
    pub(crate) fn new(binary_name: impl Into<String>) -> Self {
        let binary_name = binary_name.into();
        let simple_name = simple_name_of(&binary_name).to_string();
        Self {
            inner: Arc::new(ArtifactInner {
                binary_name,
                simple_name,
                bytes: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Fully qualified (binary) type name, e.g. `com.example.Main`.
    pub fn binary_name(&self) -> &str {
        &self.inner.binary_name
    }

    /// Simple type name: the trailing component of the binary name.
    pub fn simple_name(&self) -> &str {
        &self.inner.simple_name
    }

    /// Snapshot of the class-file bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner
            .bytes
            .read()
            .map(|bytes| bytes.clone())
            .unwrap_or_default()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.inner.bytes.read().map(|bytes| bytes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn sink(&self) -> ArtifactSink {
        ArtifactSink {
            artifact: self.clone(),
        }
    }
}

/// Writable handle the compiler streams class-file bytes into.
///
/// Appends to the buffer shared with every handle of the same artifact.
#[derive(Debug)]
pub struct ArtifactSink {
    artifact: CompiledArtifact,
}

impl ArtifactSink {
    /// Binary name of the artifact this sink feeds.
    pub fn binary_name(&self) -> &str {
        self.artifact.binary_name()
    }
}

impl Write for ArtifactSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .artifact
            .inner
            .bytes
            .write()
            .map_err(|_| io::Error::other("artifact buffer lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn simple_name_of(binary_name: &str) -> &str {
    match binary_name.rfind('.') {
        Some(dot) => &binary_name[dot + 1..],
        None => binary_name,
    }
}
