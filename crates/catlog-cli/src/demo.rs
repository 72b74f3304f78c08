//! Sample emission through the gate

use crate::config;
use anyhow::Result;
use catlog::{Category, LogConfig, LogLevel, LogStream, Registry, catlog};

/// Run the demo command
///
/// Fatal is left out: emitting it would abort the demo.
pub fn run(config_path: Option<String>, rules: Option<String>, categories: &str) -> Result<()> {
    let mut config = match config_path {
        Some(path) => config::load(path)?,
        None => LogConfig::from_env()?,
    };
    if let Some(rules) = rules {
        config.rules = rules;
    }

    let registry = Registry::global();
    let stream = LogStream::global();
    catlog::configure(&config, registry, stream);
    catlog::init_logging();

    let declared: Vec<Category> = categories
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Category::new(name, LogLevel::Info))
        .collect();

    println!("Rules: {:?}", registry.rule_string());
    for category in &declared {
        println!("{}: {}", category.name(), category.log_level());
        for level in LogLevel::ALL.into_iter().filter(|l| *l != LogLevel::Fatal) {
            catlog!(category, level, "{} message from {}", level, category.name());
        }
    }

    // Routed through the `default` category
    catlog::tracing::info!("demo finished");

    Ok(())
}
