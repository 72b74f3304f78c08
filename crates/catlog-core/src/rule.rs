//! Rule language for assigning thresholds to categories
//!
//! A rule string is a comma-separated list of `pattern=level` tokens, where
//! `pattern` is a category name or `*`. Parsing is best effort: tokens that
//! are malformed or carry an invalid level are dropped and the rest apply.
//!
//! Patterns are taken verbatim. A level is read from the leading integer of
//! its value, so `3x` and `4.5` are levels 3 and 4.

use crate::LogLevel;
use crate::error::RuleError;

const RULE_SEPARATOR: char = ',';
const LEVEL_SEPARATOR: char = '=';
const WILDCARD: &str = "*";

/// Which categories a rule applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RulePattern {
    /// `*`, matches every category
    All,
    /// Exact category name
    Name(String),
}

impl RulePattern {
    fn parse(pattern: &str) -> Self {
        if pattern == WILDCARD {
            RulePattern::All
        } else {
            RulePattern::Name(pattern.to_string())
        }
    }

    /// Check whether this pattern selects the named category
    pub fn matches(&self, name: &str) -> bool {
        match self {
            RulePattern::All => true,
            RulePattern::Name(n) => n == name,
        }
    }
}

impl std::fmt::Display for RulePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulePattern::All => write!(f, "{WILDCARD}"),
            RulePattern::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A single `pattern=level` assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: RulePattern,
    pub level: LogLevel,
}

impl Rule {
    pub fn new(pattern: RulePattern, level: LogLevel) -> Self {
        Self { pattern, level }
    }

    /// Parse one token, reporting why it was rejected
    fn parse_token(token: &str) -> Result<Self, RuleError> {
        let parts: Vec<&str> = split_non_empty(token, LEVEL_SEPARATOR).collect();
        let [pattern, value] = parts.as_slice() else {
            return Err(RuleError::MalformedToken { parts: parts.len() });
        };

        let raw = leading_integer(value)?;
        let level = LogLevel::from_raw(raw).ok_or(RuleError::LevelOutOfRange(raw))?;

        Ok(Self::new(RulePattern::parse(pattern), level))
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.pattern, LEVEL_SEPARATOR, self.level.rank())
    }
}

/// A token dropped while parsing a rule string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRule {
    pub token: String,
    pub reason: RuleError,
}

/// Ordered list of rules parsed from one rule string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rule string, silently dropping invalid tokens
    pub fn parse(input: &str) -> Self {
        Self::parse_with_report(input).0
    }

    /// Parse a rule string, also returning every dropped token and the reason
    pub fn parse_with_report(input: &str) -> (Self, Vec<RejectedRule>) {
        let mut rules = Vec::new();
        let mut rejected = Vec::new();

        for token in split_non_empty(input, RULE_SEPARATOR) {
            match Rule::parse_token(token) {
                Ok(rule) => rules.push(rule),
                Err(reason) => rejected.push(RejectedRule {
                    token: token.to_string(),
                    reason,
                }),
            }
        }

        (Self { rules }, rejected)
    }

    /// Resolve the threshold for a category
    ///
    /// Starts from `default` and applies every matching rule in order, so the
    /// last match wins.
    pub fn level_for(&self, name: &str, default: LogLevel) -> LogLevel {
        self.rules
            .iter()
            .filter(|rule| rule.pattern.matches(name))
            .fold(default, |_, rule| rule.level)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                write!(f, "{RULE_SEPARATOR}")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Split on `sep`, skipping empty pieces
fn split_non_empty(input: &str, sep: char) -> impl Iterator<Item = &str> {
    input.split(sep).filter(|s| !s.is_empty())
}

/// Read the integer at the start of `value`
///
/// Leading whitespace and one sign are skipped, then the longest run of
/// digits is taken and anything after it is ignored. The result must fit in
/// an `i32`.
fn leading_integer(value: &str) -> Result<i64, RuleError> {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return Err(RuleError::InvalidLevel(value.to_string()));
    }

    let magnitude = digits
        .parse::<i64>()
        .map_err(|_| RuleError::Overflow(value.to_string()))?;
    let raw = if negative { -magnitude } else { magnitude };
    if i32::try_from(raw).is_err() {
        return Err(RuleError::Overflow(value.to_string()));
    }
    Ok(raw)
}


#[cfg(test)]
#[path = "rule/rule_parameterized_tests.rs"]
mod rule_parameterized_tests;
