//! Process-wide conveniences over the global registry and stream

use crate::emitter::LogStream;
use crate::registry::Registry;
use crate::sink::Sink;
use catlog_core::{LogConfig, LogResult};

/// Replace the rules on the global registry
pub fn set_log_rule(rules: &str) {
    Registry::global().set_rules(rules);
}

/// Replace the destination of the global stream
pub fn set_log_sink(sink: impl Sink + 'static) {
    LogStream::global().set_sink(sink);
}

/// Get the global stream
pub fn log_stream() -> &'static LogStream {
    LogStream::global()
}

/// Apply a configuration to a registry and stream
pub fn configure(config: &LogConfig, registry: &Registry, stream: &LogStream) {
    stream.set_target(config.target);
    registry.set_rules(&config.rules);
}

/// Load configuration from the environment and apply it globally
///
/// Fails only when `CATLOG_TARGET` names an unknown stream; rule strings
/// are never rejected.
pub fn init_from_env() -> LogResult<LogConfig> {
    let config = LogConfig::from_env()?;
    configure(&config, Registry::global(), LogStream::global());
    Ok(config)
}

#[cfg(test)]
#[path = "setup/setup_tests.rs"]
mod setup_tests;
