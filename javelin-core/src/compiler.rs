//! Compiler collaborator boundary
//!
//! The actual compiler is an opaque collaborator. These traits scope it
//! to exactly what the bookkeeping layer needs: named source handles
//! going in, one output callback per emitted class coming back. There
//! is no forwarding of anything else.

use javelin_config::CompilerOptions;

use crate::error::{CompileError, SourceError};
use crate::unit::ArtifactSink;

/// A named handle to Java source text.
///
/// Reading the text may be expensive; the bookkeeping layer calls
/// `read_text` at most once per distinct `name`.
pub trait SourceHandle {
    /// Identifier of this source, unique within a compilation run.
    fn name(&self) -> &str;

    /// Read the full source text.
    fn read_text(&self) -> Result<String, SourceError>;
}

/// The narrow "an artifact was produced" capability the compiler
/// collaborator drives during a run.
///
/// Called once per emitted class, with the class's binary name and the
/// source handle it was compiled from. The returned sink must receive
/// the class-file bytes before the collaborator's `compile` returns.
pub trait OutputSink {
    fn create_output(
        &mut self,
        binary_name: &str,
        sibling: &dyn SourceHandle,
    ) -> Result<ArtifactSink, CompileError>;
}

/// The opaque compiler collaborator.
///
/// One call per run. The implementation must emit every produced class
/// through `sink`, propagate sink errors unchanged, and report its own
/// failures as [`CompileError::CompilerFailure`]. Callbacks are driven
/// sequentially; diagnostics collection is outside this boundary.
pub trait JavaCompiler {
    fn compile(
        &self,
        sources: &[Box<dyn SourceHandle>],
        options: &CompilerOptions,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CompileError>;
}

/// A source handle over an owned string.
///
/// The simplest way to feed code to a compilation run; reads never
/// fail.
#[derive(Debug, Clone)]
pub struct StringSource {
    name: String,
    text: String,
}

impl StringSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl SourceHandle for StringSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}
