//! Logging configuration types

use crate::error::{LogError, LogResult};
use serde::{Deserialize, Serialize};

/// Environment variable holding the rule string
pub const RULES_ENV: &str = "CATLOG_RULES";

/// Environment variable selecting the output stream
pub const TARGET_ENV: &str = "CATLOG_TARGET";

/// Destination stream for formatted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkTarget {
    #[default]
    Stderr,
    Stdout,
}

impl std::str::FromStr for SinkTarget {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(SinkTarget::Stderr),
            "stdout" => Ok(SinkTarget::Stdout),
            _ => Err(LogError::UnknownTarget(s.to_string())),
        }
    }
}

impl std::fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkTarget::Stderr => write!(f, "stderr"),
            SinkTarget::Stdout => write!(f, "stdout"),
        }
    }
}

/// Logging configuration supplied by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Rule string, e.g. `*=1,network=3`
    ///
    /// Invalid tokens are dropped when the rules are applied, not here.
    #[serde(default)]
    pub rules: String,

    /// Output stream for formatted records
    #[serde(default)]
    pub target: SinkTarget,
}

impl LogConfig {
    /// Create a configuration with no rules writing to stderr
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> LogResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Create configuration from a TOML document
    pub fn from_toml(text: &str) -> LogResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Create configuration from `CATLOG_RULES` and `CATLOG_TARGET`
    pub fn from_env() -> LogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    ///
    /// Missing variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> LogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(rules) = lookup(RULES_ENV) {
            config.rules = rules;
        }
        if let Some(target) = lookup(TARGET_ENV) {
            config.target = target.parse()?;
        }
        Ok(config)
    }

    /// Set the rule string
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Set the output stream
    pub fn with_target(mut self, target: SinkTarget) -> Self {
        self.target = target;
        self
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
