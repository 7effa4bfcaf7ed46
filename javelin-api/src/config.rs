//! API layer configuration
//!
//! Run configuration plus a global singleton for embedder convenience.

use javelin_config::{CompilerOptions, LogConfig};
use once_cell::sync::OnceCell;

/// Configuration for one compilation task
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Options handed to the compiler collaborator
    pub compiler: CompilerOptions,
    /// Logging configuration
    pub log: LogConfig,
}

// Global config singleton for embedder convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
