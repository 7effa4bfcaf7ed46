//! Finalized compilation units

use std::collections::HashMap;

use crate::error::CompileError;
use crate::scan::DeclarationIndex;
use crate::unit::CompiledArtifact;

/// One source unit and the class artifacts compiled from it.
///
/// Produced by finalization and immutable afterwards: `artifacts()` is
/// in source-declaration order and `main_artifact()` is the unit's
/// public (or first-declared) type.
#[derive(Debug)]
pub struct CompiledUnit {
    name: String,
    source: String,
    artifacts: Vec<CompiledArtifact>,
    main: usize,
}

impl CompiledUnit {
    /// Reorder an emission-ordered artifact list into declaration order
    /// and designate the main artifact.
    ///
    /// The emitted set and the declared set must be exactly equal:
    /// a declared type that was never emitted, an emitted type that was
    /// never declared, and a main type without an artifact are all
    /// integrity errors that abort the run. Reordering is a pure
    /// permutation, never a filter.
    pub(crate) fn finalize(
        name: String,
        source: String,
        index: DeclarationIndex,
        emitted: Vec<CompiledArtifact>,
    ) -> Result<Self, CompileError> {
        let mut by_name: HashMap<String, CompiledArtifact> = HashMap::with_capacity(emitted.len());
        for artifact in emitted {
            let simple = artifact.simple_name().to_string();
            if by_name.insert(simple, artifact).is_some() {
                return Err(CompileError::ArtifactMismatch {
                    unit: name,
                    detail: "two emitted artifacts share one simple name".to_string(),
                });
            }
        }

        let mut artifacts = Vec::with_capacity(by_name.len());
        for decl in &index.types {
            match by_name.remove(&decl.name) {
                Some(artifact) => artifacts.push(artifact),
                None => {
                    return Err(CompileError::ArtifactMismatch {
                        unit: name,
                        detail: format!(
                            "type '{}' is declared in source but was never emitted",
                            decl.name
                        ),
                    })
                }
            }
        }

        if !by_name.is_empty() {
            let mut leftover: Vec<&str> = by_name.keys().map(|k| k.as_str()).collect();
            leftover.sort_unstable();
            return Err(CompileError::ArtifactMismatch {
                unit: name,
                detail: format!(
                    "emitted artifacts match no top-level declaration: {}",
                    leftover.join(", ")
                ),
            });
        }

        let main = artifacts
            .iter()
            .position(|a| a.simple_name() == index.primary_name())
            .ok_or_else(|| CompileError::ArtifactMismatch {
                unit: name.clone(),
                detail: format!("main type '{}' has no artifact", index.primary_name()),
            })?;

        tracing::debug!(
            target: "javelin::finalize",
            unit = %name,
            artifacts = artifacts.len(),
            main = %index.primary_name(),
            "unit finalized"
        );

        Ok(Self {
            name,
            source,
            artifacts,
            main,
        })
    }

    /// Source-handle name this unit was compiled from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Artifacts in source-declaration order.
    pub fn artifacts(&self) -> &[CompiledArtifact] {
        &self.artifacts
    }

    /// The unit's main type: the public top-level type, or the first
    /// declared type when nothing is public.
    pub fn main_artifact(&self) -> &CompiledArtifact {
        &self.artifacts[self.main]
    }
}
