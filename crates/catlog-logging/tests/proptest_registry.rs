//! Property-based tests for rule application
//!
//! Checks that the registry agrees with a direct evaluation of the rule
//! list, whatever the mix of valid and malformed tokens.

use catlog_logging::{Category, LogLevel, Registry, RuleSet};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["net", "db", "ui", "core"];

// Strategy: a real level (Fatal..=Debug)
fn arb_level() -> impl Strategy<Value = LogLevel> {
    (1u8..=5).prop_map(LogLevel::from_u8)
}

// Strategy: one rule token, valid or not
fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(NAMES.to_vec()), 0i64..=5).prop_map(|(n, l)| format!("{n}={l}")),
        (0i64..=5).prop_map(|l| format!("*={l}")),
        (prop::sample::select(NAMES.to_vec()), 6i64..100).prop_map(|(n, l)| format!("{n}={l}")),
        "[a-z]{1,4}",
        "[a-z]{1,3}=[a-z]{1,3}",
        Just(String::new()),
    ]
}

fn arb_rule_string() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_token(), 0..8).prop_map(|tokens| tokens.join(","))
}

/// Direct evaluation: default, then every matching valid token in order
fn expected_level(rules: &str, name: &str, default: LogLevel) -> LogLevel {
    let mut level = default;
    for token in rules.split(',') {
        let parts: Vec<&str> = token.split('=').filter(|p| !p.is_empty()).collect();
        if parts.len() != 2 {
            continue;
        }
        let Ok(raw) = parts[1].parse::<i64>() else {
            continue;
        };
        let Some(parsed) = LogLevel::from_raw(raw) else {
            continue;
        };
        if parts[0] == "*" || parts[0] == name {
            level = parsed;
        }
    }
    level
}

proptest! {
    /// Property: every category ends at the level the rule list dictates
    #[test]
    fn proptest_set_rules_matches_direct_evaluation(
        rules in arb_rule_string(),
        defaults in prop::collection::vec(arb_level(), NAMES.len()),
    ) {
        let registry = Registry::new();
        let categories: Vec<Category> = NAMES
            .iter()
            .zip(&defaults)
            .map(|(name, level)| Category::with_registry(&registry, *name, *level))
            .collect();

        registry.set_rules(&rules);

        for (category, default) in categories.iter().zip(&defaults) {
            prop_assert_eq!(
                category.log_level(),
                expected_level(&rules, category.name(), *default)
            );
        }
    }

    /// Property: registering after the rules yields the same level as before
    #[test]
    fn proptest_registration_order_does_not_matter(
        rules in arb_rule_string(),
        default in arb_level(),
        name in prop::sample::select(NAMES.to_vec()),
    ) {
        let before = Registry::new();
        let early = Category::with_registry(&before, name, default);
        before.set_rules(&rules);

        let after = Registry::new();
        after.set_rules(&rules);
        let late = Category::with_registry(&after, name, default);

        prop_assert_eq!(early.log_level(), late.log_level());
    }

    /// Property: clearing rules always restores every default
    #[test]
    fn proptest_clear_rules_restores_defaults(
        rules in arb_rule_string(),
        defaults in prop::collection::vec(arb_level(), NAMES.len()),
    ) {
        let registry = Registry::new();
        let categories: Vec<Category> = NAMES
            .iter()
            .zip(&defaults)
            .map(|(name, level)| Category::with_registry(&registry, *name, *level))
            .collect();
        registry.set_rules(&rules);

        registry.set_rules("");

        for (category, default) in categories.iter().zip(&defaults) {
            prop_assert_eq!(category.log_level(), *default);
        }
    }

    /// Property: the canonical form re-parses to the same rule set
    #[test]
    fn proptest_canonical_rule_string_is_stable(rules in arb_rule_string()) {
        let parsed = RuleSet::parse(&rules);

        prop_assert_eq!(RuleSet::parse(&parsed.to_string()), parsed);
    }
}
