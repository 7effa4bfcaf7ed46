//! API error types
//!
//! One unified error for task orchestration, with the phase name
//! preserved so tooling can distinguish bookkeeping failures from
//! ordinary compiler diagnostics.

use javelin_core::{CompileError, ScanError};
use javelin_vfs::VfsError;
use thiserror::Error;

/// Javelin error type
#[derive(Debug, Error)]
pub enum JavelinError {
    /// A compilation-run error from the bookkeeping core
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// The given code yields no unit name
    #[error("cannot infer a unit name from the given code")]
    NameInference(#[source] ScanError),

    /// The task already holds a source under this unit name
    #[error("duplicate source unit: {name}")]
    DuplicateUnit { name: String },

    /// Unusable unit name
    #[error("invalid unit name: {reason}")]
    InvalidUnitName { reason: String },

    /// The task's source store failed
    #[error("source store error: {0}")]
    Store(#[from] VfsError),
}

impl JavelinError {
    /// Name of the pipeline phase this error belongs to
    pub fn phase(&self) -> &'static str {
        match self {
            JavelinError::Compile(err) => match err {
                CompileError::SourceRead { .. } => "source",
                CompileError::NoPrimaryType { .. } => "scan",
                CompileError::ArtifactMismatch { .. } => "finalize",
                CompileError::DuplicateArtifact { .. }
                | CompileError::InvalidArtifactName { .. } => "collect",
                CompileError::CompilerFailure { .. } => "compile",
            },
            JavelinError::NameInference(_) => "scan",
            JavelinError::DuplicateUnit { .. } | JavelinError::InvalidUnitName { .. } => "task",
            JavelinError::Store(_) => "source",
        }
    }
}
