//! Preview of rule application

use anyhow::{Context, Result};
use catlog::{Category, LogLevel, Registry};
use std::fmt::Write as _;

/// Parse a `name=level` category argument
pub fn parse_category(arg: &str) -> Result<(String, LogLevel)> {
    let (name, level) = arg
        .split_once('=')
        .with_context(|| format!("expected NAME=LEVEL, got {:?}", arg))?;
    if name.is_empty() {
        anyhow::bail!("category name cannot be empty in {:?}", arg);
    }
    let level = level
        .parse::<LogLevel>()
        .with_context(|| format!("invalid level for category {:?}", name))?;
    Ok((name.to_string(), level))
}

/// Apply `rules` to the given categories on a private registry
///
/// Returns `(name, default, effective)` per category, in argument order.
pub fn preview(rules: &str, categories: &[(String, LogLevel)]) -> Vec<(String, LogLevel, LogLevel)> {
    let registry = Registry::new();
    let declared: Vec<Category> = categories
        .iter()
        .map(|(name, level)| Category::with_registry(&registry, name.as_str(), *level))
        .collect();

    registry.set_rules(rules);

    declared
        .iter()
        .map(|c| (c.name().to_string(), c.default_level(), c.log_level()))
        .collect()
}

/// Render a preview as a table
pub fn render(rows: &[(String, LogLevel, LogLevel)]) -> String {
    let width = rows
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("CATEGORY".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {:<8}  EFFECTIVE", "CATEGORY", "DEFAULT");
    for (name, default, effective) in rows {
        let marker = if default == effective { "" } else { " *" };
        let _ = writeln!(
            out,
            "{:<width$}  {:<8}  {}{}",
            name,
            format!("{default}({})", default.rank()),
            format!("{effective}({})", effective.rank()),
            marker
        );
    }
    out
}

/// Run the apply command
pub fn run(rules: &str, categories: &[String]) -> Result<()> {
    if categories.is_empty() {
        anyhow::bail!("at least one --category NAME=LEVEL is required");
    }
    let parsed = categories
        .iter()
        .map(|arg| parse_category(arg))
        .collect::<Result<Vec<_>>>()?;

    print!("{}", render(&preview(rules, &parsed)));
    Ok(())
}
