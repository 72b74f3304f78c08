//! Call-site macro tests
//!
//! Verify that payloads are only built when the category lets them through
//! and that records land in the selected stream.

use catlog_logging::{
    Category, LogLevel, LogStream, Registry, SharedBuffer, StreamSink, catlog, catlog_debug,
    catlog_error, catlog_info, catlog_warn, default_category, set_log_rule, set_log_sink,
};
use std::cell::Cell;
use std::fmt;

/// Counts how many times it was formatted
struct Expensive<'a>(&'a Cell<u32>);

impl fmt::Display for Expensive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.set(self.0.get() + 1);
        write!(f, "expensive")
    }
}

fn capture() -> (LogStream, SharedBuffer) {
    let buffer = SharedBuffer::new();
    (LogStream::new(StreamSink::new(buffer.clone())), buffer)
}

#[test]
fn test_suppressed_message_is_never_formatted() {
    let registry = Registry::new();
    let category = Category::with_registry(&registry, "lazy", LogLevel::Warn);
    let (stream, buffer) = capture();
    let count = Cell::new(0);

    catlog!(to &stream; category, LogLevel::Debug, "{}", Expensive(&count));

    assert_eq!(count.get(), 0);
    assert!(buffer.contents().is_empty());
}

#[test]
fn test_enabled_message_is_formatted_once() {
    let registry = Registry::new();
    let category = Category::with_registry(&registry, "eager", LogLevel::Debug);
    let (stream, buffer) = capture();
    let count = Cell::new(0);

    catlog!(to &stream; category, LogLevel::Info, "{} value", Expensive(&count));

    assert_eq!(count.get(), 1);
    let contents = buffer.contents();
    assert!(contents.starts_with('I'));
    assert!(contents.contains("macro_tests.rs:"));
    assert!(contents.ends_with("] expensive value\n"));
}

#[test]
fn test_rule_update_changes_macro_gate() {
    let registry = Registry::new();
    let category = Category::with_registry(&registry, "net", LogLevel::Error);
    let (stream, buffer) = capture();

    catlog!(to &stream; category, LogLevel::Debug, "first");
    registry.set_rules("net=5");
    catlog!(to &stream; category, LogLevel::Debug, "second");
    registry.set_rules("");
    catlog!(to &stream; category, LogLevel::Debug, "third");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] second"));
}

#[test]
fn test_level_macros_use_global_stream_and_registry() {
    let buffer = SharedBuffer::new();
    set_log_sink(StreamSink::new(buffer.clone()));
    let category = Category::new("macro-global", LogLevel::Warn);

    catlog_debug!(category, "debug {}", 1);
    catlog_info!(category, "info {}", 2);
    catlog_warn!(category, "warn {}", 3);
    catlog_error!(category, "error {}", 4);
    set_log_rule("macro-global=5");
    catlog_debug!(category, "debug {}", 5);
    catlog_info!(default_category(), "from default");
    set_log_rule("");

    let lines: Vec<String> = buffer
        .lines()
        .into_iter()
        .filter(|line| line.contains("macro_tests.rs:"))
        .collect();
    assert_eq!(lines.len(), 4, "{lines:?}");
    assert!(lines[0].starts_with('W') && lines[0].ends_with("] warn 3"));
    assert!(lines[1].starts_with('E') && lines[1].ends_with("] error 4"));
    assert!(lines[2].starts_with('D') && lines[2].ends_with("] debug 5"));
    assert!(lines[3].starts_with('I') && lines[3].ends_with("] from default"));
}
