#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized sink target tests
// ============================================================================

#[test_case("stderr", SinkTarget::Stderr)]
#[test_case("stdout", SinkTarget::Stdout)]
#[test_case("StdErr", SinkTarget::Stderr)]
#[test_case(" stdout ", SinkTarget::Stdout)]
fn SinkTarget___from_str___parses_names(input: &str, expected: SinkTarget) {
    assert_eq!(input.parse::<SinkTarget>().unwrap(), expected);
}

#[test_case(SinkTarget::Stderr, "stderr")]
#[test_case(SinkTarget::Stdout, "stdout")]
fn SinkTarget___display___matches_serde_name(target: SinkTarget, expected: &str) {
    assert_eq!(target.to_string(), expected);
    assert_eq!(
        serde_json::to_string(&target).unwrap(),
        format!("\"{expected}\"")
    );
}

#[test_case(r#"{"rules": "*=1"}"#, "*=1")]
#[test_case(r#"{"rules": "net=3,db=5"}"#, "net=3,db=5")]
#[test_case(r#"{"rules": "not a rule"}"#, "not a rule")]
#[test_case(r#"{}"#, "")]
fn LogConfig___rules_json___parses_verbatim(json: &str, expected: &str) {
    let config = LogConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.rules, expected);
}
