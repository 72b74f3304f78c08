//! Record formatting and the replaceable output stream

use crate::sink::{Sink, StreamSink};
use catlog_core::{LogLevel, LogResult, SinkTarget};
use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::fmt::{self, Write as _};

/// Global log stream, writes to stderr until replaced
static GLOBAL_STREAM: OnceCell<LogStream> = OnceCell::new();

/// Timestamp layout: date, time, microseconds
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format the record prefix: `<tag><timestamp> <file>:<line>] `
pub fn format_prefix(
    level: LogLevel,
    timestamp: &DateTime<Local>,
    file: &str,
    line: u32,
) -> String {
    let mut prefix = String::with_capacity(48 + file.len());
    if let Some(tag) = level.tag() {
        prefix.push(tag);
    }
    // Writing to a String cannot fail
    let _ = write!(
        prefix,
        "{} {}:{}] ",
        timestamp.format(TIMESTAMP_FORMAT),
        file,
        line
    );
    prefix
}

/// Replaceable destination for log records
///
/// `emit` does no gating: callers check the category first.
pub struct LogStream {
    sink: Mutex<Box<dyn Sink>>,
}

impl LogStream {
    /// Create a stream writing to `sink`
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Create a stream writing to stderr
    pub fn stderr() -> Self {
        Self::new(StreamSink::stderr())
    }

    /// Create a stream for a configured target
    pub fn for_target(target: SinkTarget) -> Self {
        Self {
            sink: Mutex::new(sink_for_target(target)),
        }
    }

    /// Get the process-wide stream
    pub fn global() -> &'static LogStream {
        GLOBAL_STREAM.get_or_init(LogStream::stderr)
    }

    /// Replace the destination; affects subsequent records only
    pub fn set_sink(&self, sink: impl Sink + 'static) {
        *self.sink.lock() = Box::new(sink);
    }

    /// Replace the destination with a configured target
    pub fn set_target(&self, target: SinkTarget) {
        *self.sink.lock() = sink_for_target(target);
    }

    /// Write one record and flush
    ///
    /// The record is formatted before the sink lock is taken. Sink failures
    /// come back as [`LogError::Io`](catlog_core::LogError::Io).
    pub fn emit(
        &self,
        level: LogLevel,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> LogResult<()> {
        let mut record = format_prefix(level, &Local::now(), file, line);
        let _ = record.write_fmt(args);
        record.push('\n');

        let mut sink = self.sink.lock();
        sink.write_str(&record)?;
        sink.flush()?;
        Ok(())
    }
}

impl Default for LogStream {
    fn default() -> Self {
        Self::stderr()
    }
}

fn sink_for_target(target: SinkTarget) -> Box<dyn Sink> {
    match target {
        SinkTarget::Stderr => Box::new(StreamSink::stderr()),
        SinkTarget::Stdout => Box::new(StreamSink::stdout()),
    }
}
