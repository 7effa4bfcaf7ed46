//! Unit accumulation and run finalization
//!
//! [`UnitBuilder`] is the mutable, accumulating phase of one
//! compilation run: it receives the compiler's output callbacks,
//! groups artifacts by source unit in first-seen order, and owns the
//! artifact registry. [`UnitBuilder::finish`] consumes it into the
//! immutable [`CompiledRun`], so a run can neither be finalized twice
//! nor touched after finalization.

use indexmap::IndexMap;

use crate::compiler::{OutputSink, SourceHandle};
use crate::error::CompileError;
use crate::registry::ArtifactRegistry;
use crate::scan::{scan, DeclarationIndex};
use crate::unit::{ArtifactSink, CompiledArtifact, CompiledUnit};

/// Per-unit state while a run is accumulating.
#[derive(Debug)]
struct UnitState {
    source: String,
    index: DeclarationIndex,
    artifacts: Vec<CompiledArtifact>,
}

/// Accumulating phase of one compilation run.
///
/// The compiler collaborator holds this mutably (as its
/// [`OutputSink`]) for the duration of `compile`; every callback is
/// applied atomically before the next one arrives. Dropping the
/// builder discards the whole run, so an aborted compilation never
/// leaks partial units.
#[derive(Debug, Default)]
pub struct UnitBuilder {
    units: IndexMap<String, UnitState>,
    registry: ArtifactRegistry,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self {
            units: IndexMap::new(),
            registry: ArtifactRegistry::new(),
        }
    }

    /// Snapshot of an artifact's bytes, valid as soon as the compiler
    /// has written them (independent of finalization).
    pub fn artifact_bytes(&self, binary_name: &str) -> Option<Vec<u8>> {
        self.registry.bytes(binary_name)
    }

    /// Number of source units seen so far.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Finalize every unit, in first-seen order.
    ///
    /// Valid only after the compiler collaborator has returned
    /// successfully. Any unit failing finalization aborts the whole
    /// run: consumers only ever observe a run that finalized wholly.
    pub fn finish(self) -> Result<CompiledRun, CompileError> {
        let mut units = Vec::with_capacity(self.units.len());
        for (name, state) in self.units {
            units.push(CompiledUnit::finalize(
                name,
                state.source,
                state.index,
                state.artifacts,
            )?);
        }
        tracing::debug!(
            target: "javelin::finalize",
            units = units.len(),
            artifacts = self.registry.len(),
            "run finalized"
        );
        Ok(CompiledRun {
            units,
            registry: self.registry,
        })
    }
}

impl OutputSink for UnitBuilder {
    /// Intercept one "produce output artifact" event.
    ///
    /// On first sight of a source handle name the full source text is
    /// read exactly once and scanned immediately, so an undeclarable
    /// unit fails here rather than at finalization. The artifact is
    /// appended in callback-arrival (emission) order and registered
    /// under its binary name.
    fn create_output(
        &mut self,
        binary_name: &str,
        sibling: &dyn SourceHandle,
    ) -> Result<ArtifactSink, CompileError> {
        if binary_name.trim().is_empty() {
            return Err(CompileError::InvalidArtifactName {
                reason: "empty binary name".to_string(),
            });
        }
        if self.registry.contains(binary_name) {
            return Err(CompileError::DuplicateArtifact {
                binary_name: binary_name.to_string(),
            });
        }

        let artifact = CompiledArtifact::new(binary_name);

        if let Some(state) = self.units.get_mut(sibling.name()) {
            state.artifacts.push(artifact.clone());
        } else {
            let unit_name = sibling.name().to_string();
            let source = sibling
                .read_text()
                .map_err(|source| CompileError::SourceRead {
                    unit: unit_name.clone(),
                    source,
                })?;
            let index = scan(&source).map_err(|reason| CompileError::NoPrimaryType {
                unit: unit_name.clone(),
                reason,
            })?;
            tracing::debug!(
                target: "javelin::collect",
                unit = %unit_name,
                declared = index.types.len(),
                "new compilation unit"
            );
            self.units.insert(
                unit_name,
                UnitState {
                    source,
                    index,
                    artifacts: vec![artifact.clone()],
                },
            );
        }

        tracing::trace!(
            target: "javelin::collect",
            artifact = binary_name,
            unit = sibling.name(),
            "artifact intercepted"
        );
        self.registry.insert(artifact.clone())?;
        Ok(artifact.sink())
    }
}

/// Immutable result of a wholly finalized compilation run.
#[derive(Debug)]
pub struct CompiledRun {
    units: Vec<CompiledUnit>,
    registry: ArtifactRegistry,
}

impl CompiledRun {
    /// Finalized units, in first-seen order.
    pub fn units(&self) -> &[CompiledUnit] {
        &self.units
    }

    /// Look up a unit by its source-handle name.
    pub fn unit(&self, name: &str) -> Option<&CompiledUnit> {
        self.units.iter().find(|u| u.name() == name)
    }

    /// The run's flat artifact registry.
    pub fn registry(&self) -> &ArtifactRegistry {
        &self.registry
    }

    /// Snapshot of an artifact's bytes by binary name.
    pub fn artifact_bytes(&self, binary_name: &str) -> Option<Vec<u8>> {
        self.registry.bytes(binary_name)
    }
}
