//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`storefront.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Base URL of the backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the session token is persisted between runs.
    #[serde(default = "default_token_file")]
    pub token_file: String,

    /// Default page size for listings.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_file: default_token_file(),
            page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_token_file() -> String {
    ".storefront-token".to_string()
}

fn default_page_size() -> i64 {
    12
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CliConfig = toml::from_str(r#"base_url = "https://shop.example""#).unwrap();
        assert_eq!(config.base_url, "https://shop.example");
        assert_eq!(config.token_file, ".storefront-token");
        assert_eq!(config.page_size, 12);
    }
}
