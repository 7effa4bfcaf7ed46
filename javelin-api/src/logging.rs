//! Logging initialization
//!
//! Per-phase log control over the `javelin::*` targets, built on
//! `tracing-subscriber`.

use javelin_config::{LogConfig, LogLevel, Phase};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored multi-line format (development use)
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON format (tool integration)
    Json,
}

/// Initialize the logging system with the given configuration and format
///
/// # Panics
/// If a global subscriber is already installed
pub fn init(log: &LogConfig, format: LogFormat) {
    let targets = Targets::new()
        .with_default(level_filter(log.global))
        .with_target(Phase::Scan.target(), level_filter(log.level_for(Phase::Scan)))
        .with_target(
            Phase::Collect.target(),
            level_filter(log.level_for(Phase::Collect)),
        )
        .with_target(
            Phase::Finalize.target(),
            level_filter(log.level_for(Phase::Finalize)),
        )
        .with_target(Phase::Task.target(), level_filter(log.level_for(Phase::Task)));

    tracing_subscriber::registry()
        .with(format_layer(format).with_filter(targets))
        .init();
}

/// Create formatter layer based on format
fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer().pretty().with_target(true).boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_target(true).boxed(),
    }
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}
