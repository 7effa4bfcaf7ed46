//! Compilation units and their artifacts
//!
//! The compiler collaborator emits a flat stream of class files; this
//! module intercepts them, groups them by originating source unit, and
//! restores per-unit structure (declaration order, main type) during
//! finalization.

mod artifact;
mod builder;
#[allow(clippy::module_inception)]
mod unit;

pub use artifact::{ArtifactSink, CompiledArtifact};
pub use builder::{CompiledRun, UnitBuilder};
pub use unit::CompiledUnit;
