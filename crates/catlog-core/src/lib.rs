//! catlog-core - Severity levels, rule language, and configuration
//!
//! This crate provides the foundational types shared by every catlog crate:
//! - [`LogLevel`] severity scale used for thresholds and call-site checks
//! - [`RuleSet`] parser for operator rule strings such as `*=1,network=3`
//! - [`LogError`] for error handling
//! - [`LogConfig`] for loading rules and sink selection

mod config;
mod error;
mod rule;

pub use config::{LogConfig, RULES_ENV, SinkTarget, TARGET_ENV};
pub use error::{LogError, LogResult, RuleError};
pub use rule::{RejectedRule, Rule, RulePattern, RuleSet};

/// Severity levels
///
/// The raw value is the verbosity rank: lower values are more severe and are
/// shown under stricter thresholds. `NoLog` is below every real level, so a
/// category whose threshold is `NoLog` emits nothing.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    NoLog = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
}

impl LogLevel {
    /// The most verbose real level, upper bound for raw level validation
    pub const LAST_LOG_LEVEL: LogLevel = LogLevel::Debug;

    /// Real levels, most severe first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Check whether a raw integer is a legal level (`0..=LAST_LOG_LEVEL`)
    pub fn is_valid_raw(raw: i64) -> bool {
        (0..=i64::from(Self::LAST_LOG_LEVEL as u8)).contains(&raw)
    }

    /// Convert a raw integer, returning `None` when it is out of range
    pub fn from_raw(raw: i64) -> Option<Self> {
        if !Self::is_valid_raw(raw) {
            return None;
        }
        u8::try_from(raw).ok().map(Self::from_u8)
    }

    /// Convert a stored byte back to a level
    ///
    /// Values above `LAST_LOG_LEVEL` map to `NoLog`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Fatal,
            2 => LogLevel::Error,
            3 => LogLevel::Warn,
            4 => LogLevel::Info,
            5 => LogLevel::Debug,
            _ => LogLevel::NoLog,
        }
    }

    /// Raw verbosity rank
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Check if a message at this level passes the given threshold
    pub fn is_permitted_by(self, threshold: LogLevel) -> bool {
        self != LogLevel::NoLog && self.rank() <= threshold.rank()
    }

    /// One-character tag written at the start of each record
    pub fn tag(self) -> Option<char> {
        match self {
            LogLevel::NoLog => None,
            LogLevel::Fatal => Some('F'),
            LogLevel::Error => Some('E'),
            LogLevel::Warn => Some('W'),
            LogLevel::Info => Some('I'),
            LogLevel::Debug => Some('D'),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::NoLog => write!(f, "nolog"),
            LogLevel::Fatal => write!(f, "fatal"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = LogError;

    /// Accepts level names (case-insensitive) or raw integers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<i64>() {
            return Self::from_raw(raw).ok_or_else(|| LogError::InvalidLevel(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "nolog" | "off" => Ok(LogLevel::NoLog),
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogConfig, LogError, LogLevel, LogResult, Rule, RulePattern, RuleSet};
}
