//! Error types for catlog

use thiserror::Error;

/// Result type alias for catlog operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for configuration and sink operations
///
/// Rule strings never produce a `LogError`: malformed rules are dropped.
#[derive(Error, Debug)]
pub enum LogError {
    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Sink I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown sink target name
    #[error("unknown sink target: {0}")]
    UnknownTarget(String),

    /// Level name or integer not recognised
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        LogError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::Config(err.to_string())
    }
}

/// Reason a rule token was dropped during parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Token did not split into exactly `pattern=level`
    #[error("expected `pattern=level`, got {parts} part(s)")]
    MalformedToken { parts: usize },

    /// Level does not start with an integer
    #[error("level `{0}` is not an integer")]
    InvalidLevel(String),

    /// Level integer does not fit in 32 bits
    #[error("level `{0}` overflows")]
    Overflow(String),

    /// Level is an integer outside the valid range
    #[error("level {0} is out of range")]
    LevelOutOfRange(i64),
}
