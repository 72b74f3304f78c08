//! # catlog
//!
//! Category-based logging whose thresholds can be changed at runtime with a
//! compact rule string.
//!
//! catlog provides:
//! - Named categories, each with its own threshold and remembered default
//! - A rule language (`*=1,network=3`) applied to every live category
//! - Gating macros that skip formatting for suppressed messages
//! - A replaceable output stream, stderr by default
//! - A `tracing` layer so existing `tracing` events go through a category
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! catlog = "0.3"
//! ```
//!
//! ## Declaring a Category
//!
//! ```ignore
//! use catlog::prelude::*;
//!
//! static NETWORK: Lazy<Category> = Lazy::new(|| Category::new("network", LogLevel::Info));
//!
//! fn connect(peer: &str) {
//!     catlog_debug!(NETWORK, "dialing {}", peer);
//!     catlog_warn!(NETWORK, "slow handshake with {}", peer);
//! }
//!
//! fn main() {
//!     // Everything at Fatal only, except network at Debug
//!     catlog::set_log_rule("*=1,network=5");
//!     connect("10.0.0.7:443");
//! }
//! ```
//!
//! Levels are `0` (no logging) through `5` (debug). Fatal messages are never
//! dropped: a suppressed fatal check aborts the process, and a written fatal
//! message aborts after it is flushed.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`catlog_core`] - Levels, rule parsing, configuration, errors
//! - [`catlog_logging`] - Categories, registry, streams, macros, tracing layer

// Re-export core types
pub use catlog_core::{
    LogConfig, LogError, LogLevel, LogResult, RejectedRule, Rule, RuleError, RulePattern,
    RuleSet, SinkTarget,
};

// Re-export logging types and functions
pub use catlog_logging::{
    Category, CategoryId, CategoryLayer, CategorySnapshot, LineCallback, LineSink, LogStream,
    Registry, SharedBuffer, Sink, StreamSink, configure, default_category, format_prefix,
    init_from_env, init_logging, init_logging_with_rules, log_stream, set_log_rule, set_log_sink,
};

// Re-export macros
pub use catlog_logging::{
    catlog, catlog_assert, catlog_debug, catlog_error, catlog_fatal, catlog_info, catlog_warn,
};

// Re-export common dependencies that callers need
pub use once_cell;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use catlog::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Core types: `Category`, `LogLevel`, `Registry`, `LogStream`
/// - Macros: `catlog!`, `catlog_debug!` through `catlog_fatal!`, `catlog_assert!`
/// - `Lazy` for declaring categories in statics
pub mod prelude {
    pub use crate::{
        Category, LogLevel, LogStream, Registry, catlog, catlog_assert, catlog_debug,
        catlog_error, catlog_fatal, catlog_info, catlog_warn, default_category, set_log_rule,
    };

    pub use once_cell::sync::Lazy;
}
