//! catlog-logging - Category registry, gating, and record emission
//!
//! This crate provides:
//! - [`Category`] named thresholds owned by the subsystems that declare them
//! - [`Registry`] tracking live categories and applying rule strings
//! - [`LogStream`] and [`Sink`] for formatted, flushed records
//! - [`catlog!`] and friends, which gate before formatting
//! - [`CategoryLayer`] to route `tracing` events through a category

mod category;
mod emitter;
mod layer;
mod macros;
mod registry;
mod setup;
mod sink;

pub use catlog_core::{LogConfig, LogLevel, RuleSet, SinkTarget};
pub use category::{Category, CategoryId, default_category};
pub use emitter::{LogStream, format_prefix};
pub use layer::{CategoryLayer, init_logging, init_logging_with_rules};
pub use registry::{CategorySnapshot, Registry};
pub use setup::{configure, init_from_env, log_stream, set_log_rule, set_log_sink};
pub use sink::{DEFAULT_LINE_CAPACITY, LineCallback, LineSink, SharedBuffer, Sink, StreamSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Category, LogLevel, LogStream, Registry, catlog, catlog_assert, catlog_debug,
        catlog_error, catlog_fatal, catlog_info, catlog_warn, default_category, set_log_rule,
    };
}
