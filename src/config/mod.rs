use crate::convert::DEFAULT_PRECISION;
use crate::units::Category;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    // Decimal places for conversion results and prices
    #[serde(default = "default_precision")]
    pub precision: usize,

    // Shown before prices by the command line front end
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DefaultsConfig {
    // Initial category for interactive sessions
    #[serde(default)]
    pub category: Option<Category>,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.display.precision, 2);
        assert_eq!(config.display.currency, "₹");
        assert_eq!(config.defaults.category, None);
    }

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml(
            r#"
[display]
precision = 3
currency = "$"

[defaults]
category = "Length"
"#,
        )
        .unwrap();
        assert_eq!(config.display.precision, 3);
        assert_eq!(config.display.currency, "$");
        assert_eq!(config.defaults.category, Some(Category::Length));
    }

    #[test]
    fn test_partial_display_section() {
        let config = Config::from_toml("[display]\nprecision = 1\n").unwrap();
        assert_eq!(config.display.precision, 1);
        assert_eq!(config.display.currency, "₹");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml("[defaults]\ncategory = \"Volume\"\n"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            Config::load_from_file("/nonexistent/unitconv.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
