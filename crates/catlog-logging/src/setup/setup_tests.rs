#![allow(non_snake_case)]

use super::*;
use crate::Category;
use catlog_core::{LogLevel, SinkTarget};

#[test]
fn configure___applies_rules_to_registry() {
    let registry = Registry::new();
    let stream = LogStream::stderr();
    let category = Category::with_registry(&registry, "db", LogLevel::Info);
    let config = LogConfig::new().with_rules("db=1");

    configure(&config, &registry, &stream);

    assert_eq!(category.log_level(), LogLevel::Fatal);
    assert_eq!(registry.rule_string(), "db=1");
}

#[test]
fn configure___empty_rules___restores_defaults() {
    let registry = Registry::new();
    let stream = LogStream::stderr();
    let category = Category::with_registry(&registry, "db", LogLevel::Warn);
    registry.set_rules("db=5");

    configure(
        &LogConfig::new().with_target(SinkTarget::Stdout),
        &registry,
        &stream,
    );

    assert_eq!(category.log_level(), LogLevel::Warn);
}
