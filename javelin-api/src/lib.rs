//! Javelin API - Compilation orchestration layer
//!
//! Provides the compile-strings-in-memory facade over the bookkeeping
//! core, including:
//! - Task orchestration (`CompilationTask`)
//! - Configuration abstraction (`RunConfig`)
//! - Unified error handling (`JavelinError`)
//!
//! For embedder convenience, this crate provides a global config
//! singleton. For library use, prefer the explicit
//! `CompilationTask::with_config` API.

use std::path::PathBuf;
use std::sync::Arc;

use javelin_core::{scan, SourceHandle, UnitBuilder};
use javelin_vfs::{MemoryFileSystem, VirtualFileSystem};
use tracing::info;

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from javelin_config
pub use javelin_config::{CompilerOptions, LogConfig, LogLevel, Phase};

// Re-export error and logging
pub mod error;
pub mod logging;
pub mod source;
pub use error::JavelinError;
pub use logging::LogFormat;
pub use source::VfsSource;

// Re-export the core types consumers read results through
pub use javelin_core::{
    CompileError, CompiledArtifact, CompiledRun, CompiledUnit, JavaCompiler,
};

/// An in-memory compilation task: named Java sources going in, a wholly
/// finalized run coming out.
///
/// Sources live in a [`MemoryFileSystem`]; the compiler collaborator
/// reads them through [`VfsSource`] handles when it first touches each
/// unit.
pub struct CompilationTask {
    fs: Arc<MemoryFileSystem>,
    units: Vec<String>,
    config: RunConfig,
}

impl CompilationTask {
    /// Create a task with default configuration
    pub fn new() -> Self {
        Self::with_config(RunConfig::default())
    }

    /// Create a task with explicit configuration
    ///
    /// This is the recommended API for library users.
    pub fn with_config(config: RunConfig) -> Self {
        Self {
            fs: Arc::new(MemoryFileSystem::new()),
            units: Vec::new(),
            config,
        }
    }

    /// Add a source, inferring its unit name from the code itself:
    /// the `package` header plus the primary type name.
    ///
    /// Returns the inferred name, e.g. `com.example.Main`.
    pub fn add_source(&mut self, code: &str) -> Result<String, JavelinError> {
        let index = scan(code).map_err(JavelinError::NameInference)?;
        let name = index.qualified(index.primary_name());
        self.add_named_source(&name, code)?;
        Ok(name)
    }

    /// Add a source under an explicit unit name.
    pub fn add_named_source(&mut self, name: &str, code: &str) -> Result<(), JavelinError> {
        if name.trim().is_empty() {
            return Err(JavelinError::InvalidUnitName {
                reason: "empty name".to_string(),
            });
        }
        if self.units.iter().any(|unit| unit == name) {
            return Err(JavelinError::DuplicateUnit {
                name: name.to_string(),
            });
        }
        self.fs.write_file(&source_path(name), code.as_bytes())?;
        self.units.push(name.to_string());
        Ok(())
    }

    /// Unit names in insertion order
    pub fn unit_names(&self) -> &[String] {
        &self.units
    }

    /// Drive the compiler collaborator over this task's sources and
    /// finalize the run.
    ///
    /// The run either finalizes wholly or fails as a whole; no partial
    /// result is ever returned.
    pub fn compile(&self, compiler: &dyn JavaCompiler) -> Result<CompiledRun, JavelinError> {
        info!(
            target: "javelin::task",
            units = self.units.len(),
            "starting compilation"
        );

        let fs: Arc<dyn VirtualFileSystem> = self.fs.clone();
        let handles: Vec<Box<dyn SourceHandle>> = self
            .units
            .iter()
            .map(|name| {
                Box::new(VfsSource::new(name.clone(), source_path(name), fs.clone()))
                    as Box<dyn SourceHandle>
            })
            .collect();

        let mut builder = UnitBuilder::new();
        compiler.compile(&handles, &self.config.compiler, &mut builder)?;
        let run = builder.finish()?;

        info!(
            target: "javelin::task",
            units = run.units().len(),
            artifacts = run.registry().len(),
            "compilation finished"
        );
        Ok(run)
    }
}

impl Default for CompilationTask {
    fn default() -> Self {
        Self::new()
    }
}

/// Store path for a unit's source text
fn source_path(unit_name: &str) -> PathBuf {
    PathBuf::from(format!("/src/{}.java", unit_name))
}

/// Compile a single source with explicit configuration
pub fn compile_source(
    code: &str,
    compiler: &dyn JavaCompiler,
    config: &RunConfig,
) -> Result<CompiledRun, JavelinError> {
    let mut task = CompilationTask::with_config(config.clone());
    task.add_source(code)?;
    task.compile(compiler)
}

/// Compile a single source (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn compile(code: &str, compiler: &dyn JavaCompiler) -> Result<CompiledRun, JavelinError> {
    compile_source(code, compiler, get_config())
}

/// Compile with default config (auto-initializes the global if needed)
pub fn quick_compile(
    code: &str,
    compiler: &dyn JavaCompiler,
) -> Result<CompiledRun, JavelinError> {
    if !is_initialized() {
        init_config(RunConfig::default());
    }
    compile(code, compiler)
}
