//! Error types for the compilation bookkeeping core

use crate::scan::ScanError;
use thiserror::Error;

/// Error raised while reading a source handle's text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source not found: {name}")]
    NotFound { name: String },

    #[error("source is not valid UTF-8: {name}")]
    NotUtf8 { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors of one compilation run.
///
/// Every variant is fatal for the whole run: these conditions reflect a
/// contract violation between components, not a transient fault, so
/// there is no retry path. Messages carry the offending unit's source
/// name where one exists.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The sibling source handle's text could not be read.
    #[error("failed to read source for unit '{unit}'")]
    SourceRead {
        unit: String,
        #[source]
        source: SourceError,
    },

    /// The source text declares no usable primary type.
    #[error("no type declaration found in '{unit}'")]
    NoPrimaryType {
        unit: String,
        #[source]
        reason: ScanError,
    },

    /// Declared and emitted type sets differ for a unit.
    #[error("artifact/source mismatch in unit '{unit}': {detail}")]
    ArtifactMismatch { unit: String, detail: String },

    /// The same qualified name was emitted twice in one run.
    #[error("duplicate artifact name emitted: {binary_name}")]
    DuplicateArtifact { binary_name: String },

    /// The compiler handed over an unusable artifact name.
    #[error("invalid artifact name: {reason}")]
    InvalidArtifactName { reason: String },

    /// The compiler collaborator reported failure for the run.
    #[error("compiler failure: {message}")]
    CompilerFailure { message: String },
}
