//! Test helpers
//!
//! A mock compiler collaborator that behaves the way javac does at the
//! output boundary: one class file per declared type, emitted in
//! alphabetical order of binary name - the order the bookkeeping layer
//! exists to undo.

use std::io::Write;

use javelin_config::CompilerOptions;
use javelin_core::{
    scan, CompileError, CompiledRun, JavaCompiler, OutputSink, SourceHandle, StringSource,
    UnitBuilder,
};

/// Fabricated class-file payload: magic header plus the binary name.
pub fn class_bytes(binary_name: &str) -> Vec<u8> {
    let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE];
    bytes.extend_from_slice(binary_name.as_bytes());
    bytes
}

/// Mock javac: scans each source, emits one artifact per declared
/// top-level type in alphabetical order, and streams the fabricated
/// bytes through the sink before moving on.
pub struct MockJavac;

impl JavaCompiler for MockJavac {
    fn compile(
        &self,
        sources: &[Box<dyn SourceHandle>],
        _options: &CompilerOptions,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CompileError> {
        for source in sources {
            let text = source.read_text().map_err(|e| CompileError::CompilerFailure {
                message: format!("cannot read '{}': {}", source.name(), e),
            })?;
            let index = scan(&text).map_err(|e| CompileError::CompilerFailure {
                message: format!("cannot compile '{}': {}", source.name(), e),
            })?;

            let mut names: Vec<String> = index
                .declared_names()
                .map(|simple| index.qualified(simple))
                .collect();
            names.sort();

            for name in names {
                let mut out = sink.create_output(&name, source.as_ref())?;
                out.write_all(&class_bytes(&name))
                    .map_err(|e| CompileError::CompilerFailure {
                        message: e.to_string(),
                    })?;
            }
        }
        Ok(())
    }
}

/// Drive a full run over in-memory sources with the mock javac.
pub fn compile_sources(sources: &[(&str, &str)]) -> Result<CompiledRun, CompileError> {
    let handles: Vec<Box<dyn SourceHandle>> = sources
        .iter()
        .map(|(name, code)| Box::new(StringSource::new(*name, *code)) as Box<dyn SourceHandle>)
        .collect();

    let mut builder = UnitBuilder::new();
    MockJavac.compile(&handles, &CompilerOptions::default(), &mut builder)?;
    builder.finish()
}
