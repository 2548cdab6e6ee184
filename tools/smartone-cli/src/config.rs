//! Shell configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smartone_observability::{LogFormat, LogLevel};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["smartone.toml", ".smartone.toml", "smartone.json"];

/// Shell configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Store presentation.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShellConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Parse config text, JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

/// Store presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "SMART ONE".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (TOML or JSON), relative to the config file.
    /// The built-in demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to stderr.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Log every cart change.
    #[serde(default = "default_true")]
    pub cart_events: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            cart_events: true,
        }
    }
}

/// Generate a default smartone.toml config file.
pub fn generate_default_config() -> String {
    r#"# SMART ONE storefront configuration

[store]
name = "SMART ONE"

[catalog]
# Catalog file (TOML or JSON). The built-in demo catalog is used when unset.
# path = "catalog.toml"

[logging]
# trace | debug | info | warn | error
level = "warn"
# human | json
format = "human"
cart_events = true
"#
    .to_string()
}
