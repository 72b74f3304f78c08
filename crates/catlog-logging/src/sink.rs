//! Output sinks for formatted log records

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Default buffer size for [`LineSink`]
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// Destination for formatted log records
///
/// A sink accepts text and an explicit flush. Records are written in one
/// `write_str` call followed by `flush`.
pub trait Sink: Send {
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Sink over any [`Write`] implementation
pub struct StreamSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Callback receiving one complete, trimmed line
pub type LineCallback = Box<dyn FnMut(&str) + Send>;

/// Sink that buffers characters and hands complete lines to a callback
///
/// Used to route records into platform logging channels that take whole
/// messages rather than a byte stream. The buffer is delivered on every
/// flush, or early when it would exceed its capacity. Blank lines are not
/// delivered.
pub struct LineSink {
    buffer: String,
    capacity: usize,
    callback: LineCallback,
}

impl LineSink {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Self::with_capacity(DEFAULT_LINE_CAPACITY, callback)
    }

    pub fn with_capacity<F>(capacity: usize, callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        let capacity = capacity.max(1);
        Self {
            buffer: String::with_capacity(capacity),
            capacity,
            callback: Box::new(callback),
        }
    }

    /// Bytes currently buffered
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    fn deliver(&mut self) {
        let line = self.buffer.trim();
        if !line.is_empty() {
            (self.callback)(line);
        }
        self.buffer.clear();
    }
}

impl Sink for LineSink {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        for ch in s.chars() {
            if self.buffer.len() + ch.len_utf8() > self.capacity {
                self.deliver();
            }
            self.buffer.push(ch);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.deliver();
        Ok(())
    }
}

/// Cloneable in-memory writer, every clone appends to the same buffer
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered output decoded as UTF-8 (lossy)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Buffered output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
