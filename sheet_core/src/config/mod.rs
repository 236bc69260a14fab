//! Configuration loading from TOML files

mod rules;

pub use rules::{ArmorRules, ConversionRules, ModifierKind, SubtypeRules, UnitRules};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load conversion rules from a TOML file and validate them
pub fn load_rules(path: &Path) -> Result<ConversionRules, ConfigError> {
    let rules: ConversionRules = load_toml(path)?;
    rules.validate()?;
    tracing::info!(path = %path.display(), "loaded conversion rules");
    Ok(rules)
}

/// Parse conversion rules from a TOML string and validate them
pub fn parse_rules(content: &str) -> Result<ConversionRules, ConfigError> {
    let rules: ConversionRules = parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

/// The rules shipped with the crate
pub fn default_rules() -> ConversionRules {
    let toml = include_str!("../../config/rules.toml");
    parse_rules(toml).unwrap_or_else(|e| {
        tracing::warn!("bundled rules failed to load, using built-in defaults: {}", e);
        ConversionRules::default()
    })
}
