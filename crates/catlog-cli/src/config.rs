//! Configuration file loading

use anyhow::{Context, Result};
use catlog::LogConfig;
use std::path::Path;

/// Load a configuration file, choosing the format by extension
///
/// `.json` files are parsed as JSON, everything else as TOML.
pub fn load(path: impl AsRef<Path>) -> Result<LogConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;

    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<LogConfig> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        LogConfig::from_json(content.as_bytes())
    } else {
        LogConfig::from_toml(content)
    };
    config.with_context(|| format!("Failed to parse config: {:?}", path))
}
