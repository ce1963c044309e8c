//! Shared state handed to every subcommand.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_api::{ApiClient, TokenStore};
use storefront_client::Storefront;
use storefront_store::Store;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 2] = ["storefront.toml", ".storefront.toml"];

/// Everything a command needs: config, output handler, working directory.
pub struct Context {
    pub config: CliConfig,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Resolve the config (explicit `--config` path, or the nearest
    /// `storefront.toml` walking up from the working directory) and build
    /// the context.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => discover_config(&cwd).unwrap_or_default(),
        };
        Ok(Self { config, output, cwd })
    }

    /// Where the token file lives, relative paths resolved against cwd.
    pub fn token_path(&self) -> PathBuf {
        let path = Path::new(&self.config.token_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Build the service bundle, seeding the token from disk if present.
    pub fn storefront(&self) -> Storefront {
        let token = TokenStore::new();
        if let Ok(saved) = std::fs::read_to_string(self.token_path()) {
            let saved = saved.trim();
            if !saved.is_empty() {
                token.set(saved);
            }
        }
        let api = ApiClient::new(&self.config.base_url, token);
        Storefront::new(api, Store::spawn())
    }

    /// Persist the session token.
    pub fn save_token(&self, token: &str) -> Result<()> {
        std::fs::write(self.token_path(), token)
            .with_context(|| format!("Failed to write token file: {}", self.token_path().display()))
    }

    /// Remove the persisted session token.
    pub fn clear_token(&self) -> Result<()> {
        let path = self.token_path();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove token file: {}", path.display()))?;
        }
        Ok(())
    }
}

/// Walk from `start` to the filesystem root looking for a config file.
fn discover_config(start: &Path) -> Option<CliConfig> {
    for dir in start.ancestors() {
        for name in CONFIG_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                if let Some(path) = candidate.to_str() {
                    if let Ok(config) = CliConfig::load(path) {
                        return Some(config);
                    }
                }
            }
        }
    }
    None
}
