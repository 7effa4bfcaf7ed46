//! Javelin Core - compilation bookkeeping (pure logic, no IO)
//!
//! Intercepts the class files a Java compiler emits, groups them by
//! originating source unit, and reconstructs per-unit structure -
//! source-declaration order and the main type - from the emitted
//! artifacts plus the original source text. The compiler itself is an
//! opaque collaborator behind the [`JavaCompiler`] trait; invoking it,
//! collecting its diagnostics, and loading the resulting classes all
//! live outside this crate.
//!
//! Only operates on in-memory data structures; the one potentially
//! blocking call is the single source-text read per unit.

pub mod compiler;
pub mod error;
pub mod registry;
pub mod scan;
pub mod unit;

pub use compiler::{JavaCompiler, OutputSink, SourceHandle, StringSource};
pub use error::{CompileError, SourceError};
pub use registry::ArtifactRegistry;
pub use scan::{scan, DeclarationIndex, ScanError, TypeDecl};
pub use unit::{ArtifactSink, CompiledArtifact, CompiledRun, CompiledUnit, UnitBuilder};

// Re-export config types from javelin-config
pub use javelin_config::CompilerOptions;
