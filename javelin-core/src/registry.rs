//! Run-scoped artifact registry
//!
//! A flat, name-keyed store of every artifact emitted during one
//! compilation run, populated while output is intercepted and queried
//! by classloading consumers afterwards. No unit or ordering semantics
//! leak into this store; it exists so a compiled type can be looked up
//! by its binary name alone.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::CompileError;
use crate::unit::CompiledArtifact;

/// Write-once map from binary type name to compiled artifact.
///
/// The compiler must never emit the same qualified name twice in one
/// run; a duplicate insert is a hard error, not an overwrite.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: IndexMap<String, CompiledArtifact>,
}

impl ArtifactRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            artifacts: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, artifact: CompiledArtifact) -> Result<(), CompileError> {
        match self.artifacts.entry(artifact.binary_name().to_string()) {
            Entry::Occupied(entry) => Err(CompileError::DuplicateArtifact {
                binary_name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(artifact);
                Ok(())
            }
        }
    }

    /// Get an artifact by binary name
    pub fn get(&self, binary_name: &str) -> Option<&CompiledArtifact> {
        self.artifacts.get(binary_name)
    }

    /// Snapshot of an artifact's bytes, valid once they have been
    /// written (independent of finalization)
    pub fn bytes(&self, binary_name: &str) -> Option<Vec<u8>> {
        self.artifacts.get(binary_name).map(|a| a.bytes())
    }

    /// Check if a binary name is registered
    pub fn contains(&self, binary_name: &str) -> bool {
        self.artifacts.contains_key(binary_name)
    }

    /// Registered binary names, in emission order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(|k| k.as_str())
    }

    /// Number of registered artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
