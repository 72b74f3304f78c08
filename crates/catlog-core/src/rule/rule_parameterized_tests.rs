#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized rule token tests
// ============================================================================

#[test_case("net=0", LogLevel::NoLog)]
#[test_case("net=1", LogLevel::Fatal)]
#[test_case("net=2", LogLevel::Error)]
#[test_case("net=3", LogLevel::Warn)]
#[test_case("net=4", LogLevel::Info)]
#[test_case("net=5", LogLevel::Debug)]
#[test_case("net= 3 ", LogLevel::Warn)]
#[test_case("net=+2", LogLevel::Error)]
#[test_case("net=3x", LogLevel::Warn)]
#[test_case("net=4.5", LogLevel::Info)]
#[test_case("net=3.0", LogLevel::Warn)]
#[test_case("net=\t5 verbose", LogLevel::Debug)]
fn RuleSet___parse___accepts_valid_levels(input: &str, expected: LogLevel) {
    let rules = RuleSet::parse(input);

    assert_eq!(rules.len(), 1);
    assert_eq!(rules.level_for("net", LogLevel::Debug), expected);
}

#[test_case("net")]
#[test_case("net=")]
#[test_case("=3")]
#[test_case("net=3=4")]
#[test_case("net=-1")]
#[test_case("net=6")]
#[test_case("net=three")]
#[test_case("net=x3")]
#[test_case("net=-")]
#[test_case("net= ")]
#[test_case("net=.5")]
#[test_case("net=4294967296")]
fn RuleSet___parse___drops_invalid_tokens(input: &str) {
    let (rules, rejected) = RuleSet::parse_with_report(input);

    assert!(rules.is_empty());
    assert_eq!(rejected.len(), 1);
}

#[test_case("*=2,foo=4", "foo", LogLevel::Info)]
#[test_case("*=2,foo=4", "bar", LogLevel::Error)]
#[test_case("foo=4,*=2", "foo", LogLevel::Error)]
#[test_case("foo=1,foo=3", "foo", LogLevel::Warn)]
#[test_case("foo=1,bogus,foo=x", "foo", LogLevel::Fatal)]
fn RuleSet___level_for___resolves_expected_level(rules: &str, name: &str, expected: LogLevel) {
    let rules = RuleSet::parse(rules);

    assert_eq!(rules.level_for(name, LogLevel::Debug), expected);
}
