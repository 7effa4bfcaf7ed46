//! Javelin Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Javelin
//! crates.

use serde::{Deserialize, Serialize};

/// Options handed to the compiler collaborator for one run.
///
/// Javelin never interprets these itself; they travel opaquely to the
/// compiler boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerOptions {
    /// Whether to ask the compiler for debug information (`-g`)
    pub emit_debug_info: bool,
    /// Whether warnings should fail the run (`-Werror`)
    pub warnings_as_errors: bool,
    /// Target language/VM release (`--release N`), if pinned
    pub release: Option<u32>,
    /// Additional raw flags passed through verbatim
    pub extra_flags: Vec<String>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            emit_debug_info: true,
            warnings_as_errors: false,
            release: None,
            extra_flags: Vec::new(),
        }
    }
}

/// Pipeline phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Declaration scanning of source text
    Scan,
    /// Artifact interception and unit accumulation
    Collect,
    /// Per-unit reordering and main-type selection
    Finalize,
    /// API-level task orchestration
    Task,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scan => "scan",
            Phase::Collect => "collect",
            Phase::Finalize => "finalize",
            Phase::Task => "task",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("javelin::{}", self.as_str())
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" | "verbose" => Some(Self::Trace),
            _ => None,
        }
    }
}

/// Per-phase logging configuration
///
/// `global` applies to every `javelin::*` target unless a phase override
/// is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default level for all targets
    pub global: LogLevel,
    /// Override for `javelin::scan`
    pub scan: Option<LogLevel>,
    /// Override for `javelin::collect`
    pub collect: Option<LogLevel>,
    /// Override for `javelin::finalize`
    pub finalize: Option<LogLevel>,
    /// Override for `javelin::task`
    pub task: Option<LogLevel>,
}

impl LogConfig {
    /// Effective level for a phase (override or global)
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let level = match phase {
            Phase::Scan => self.scan,
            Phase::Collect => self.collect,
            Phase::Finalize => self.finalize,
            Phase::Task => self.task,
        };
        level.unwrap_or(self.global)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Info,
            scan: None,
            collect: None,
            finalize: None,
            task: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compiler_options() {
        let opts = CompilerOptions::default();
        assert!(opts.emit_debug_info);
        assert!(!opts.warnings_as_errors);
        assert_eq!(opts.release, None);
        assert!(opts.extra_flags.is_empty());
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Scan.as_str(), "scan");
        assert_eq!(Phase::Finalize.target(), "javelin::finalize");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_log_config_level_for() {
        let cfg = LogConfig {
            collect: Some(LogLevel::Trace),
            ..LogConfig::default()
        };
        assert_eq!(cfg.level_for(Phase::Collect), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Scan), LogLevel::Info);
    }

    #[test]
    fn test_compiler_options_serde_roundtrip() {
        let opts = CompilerOptions {
            emit_debug_info: false,
            warnings_as_errors: true,
            release: Some(17),
            extra_flags: vec!["-nowarn".to_string()],
        };
        let json = serde_json::to_string(&opts).unwrap();
        let back: CompilerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.release, Some(17));
        assert!(back.warnings_as_errors);
        assert_eq!(back.extra_flags, vec!["-nowarn".to_string()]);
    }

    #[test]
    fn test_log_config_serde_roundtrip() {
        let cfg = LogConfig {
            global: LogLevel::Debug,
            finalize: Some(LogLevel::Trace),
            ..LogConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"debug\""));
        let back: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.global, LogLevel::Debug);
        assert_eq!(back.level_for(Phase::Finalize), LogLevel::Trace);
    }
}
