//! Rule string checking

use anyhow::Result;
use catlog::RuleSet;
use std::fmt::Write as _;

/// Render the parse result of a rule string
pub fn report(rules: &str) -> (String, usize) {
    let (parsed, rejected) = RuleSet::parse_with_report(rules);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Accepted rules: {}", parsed.len());
    for rule in &parsed {
        let _ = writeln!(out, "  ✓ {} -> {}", rule.pattern, rule.level);
    }
    if !rejected.is_empty() {
        let _ = writeln!(out, "Dropped tokens: {}", rejected.len());
        for rejected in &rejected {
            let _ = writeln!(out, "  ✗ {:?}: {}", rejected.token, rejected.reason);
        }
    }
    let _ = writeln!(out, "Canonical: {:?}", parsed.to_string());

    (out, rejected.len())
}

/// Run the check command
pub fn run(rules: &str, strict: bool) -> Result<()> {
    let (out, dropped) = report(rules);
    print!("{out}");

    if strict && dropped > 0 {
        anyhow::bail!("{} rule token(s) would be dropped", dropped);
    }

    Ok(())
}
