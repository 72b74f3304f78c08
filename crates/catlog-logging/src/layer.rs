//! Tracing layer that routes events through a category

use crate::category::{Category, default_category};
use crate::emitter::LogStream;
use catlog_core::LogLevel;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that gates `tracing` events with a category and writes
/// them as catlog records
///
/// `tracing` has no fatal level, so this layer never aborts.
pub struct CategoryLayer {
    category: &'static Category,
    stream: &'static LogStream,
}

impl CategoryLayer {
    /// Create a layer over the default category and the global stream
    pub fn new() -> Self {
        Self {
            category: default_category(),
            stream: LogStream::global(),
        }
    }

    /// Create a layer with a specific category and stream
    pub fn with_parts(category: &'static Category, stream: &'static LogStream) -> Self {
        Self { category, stream }
    }

    /// Map a `tracing` level onto the category scale; `TRACE` folds into `Debug`
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE | Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for CategoryLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for CategoryLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // Thresholds change at runtime, so callsite interest is never cached
    fn register_callsite(&self, _metadata: &'static tracing::Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.category.check_log_level(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        // Events from non-Rust sources may lack a location
        let file = metadata.file().unwrap_or_else(|| metadata.target());
        let line = metadata.line().unwrap_or(0);

        let _ = self.stream.emit(
            level,
            file,
            line,
            format_args!("{}", visitor.into_message()),
        );
    }

    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        let level = Self::convert_level(metadata.level());
        self.category.check_log_level(level)
    }
}

/// Picks the record payload out of an event
///
/// The `message` field wins; otherwise the first field recorded is used.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        self.message.unwrap_or_default()
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

/// Install [`CategoryLayer`] as the global tracing subscriber
///
/// Events are gated by the `default` category, so `set_log_rule("default=5")`
/// turns on debug output. An already-installed subscriber is left in place.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;

    let subscriber = tracing_subscriber::registry().with(CategoryLayer::new());
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Apply `rules` to the global registry, then install the layer
pub fn init_logging_with_rules(rules: &str) {
    crate::setup::set_log_rule(rules);
    init_logging();
}
