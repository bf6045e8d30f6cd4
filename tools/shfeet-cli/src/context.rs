//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use shfeet_cache::Cache;
use shfeet_commerce::cart::Cart;
use shfeet_commerce::catalog::Catalog;
use shfeet_data::{FetchClient, StorefrontApi};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with environment overrides applied.
    pub config: CliConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Product catalog.
    pub catalog: Catalog,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config_path, config) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                let config = CliConfig::load(&path)?;
                (Some(path), config)
            }
            None => match CliConfig::discover(&cwd)? {
                Some((path, config)) => (Some(path), config),
                None => (None, CliConfig::default()),
            },
        };

        Ok(Self {
            config: config.with_env(),
            config_path,
            output,
            cwd,
            catalog: Catalog::storefront(),
        })
    }

    /// Directory holding the persisted cart.
    pub fn data_dir(&self) -> PathBuf {
        resolve(&self.cwd, &self.config.store.data_dir)
    }

    /// Open the persisted cart, priced with the configured delivery table.
    pub fn open_cart(&self) -> Result<Cart> {
        let dir = self.data_dir();
        let cache = Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        let cart = Cart::restore(cache).with_policy(self.config.delivery_policy()?)?;
        Ok(cart)
    }

    /// Client for the storefront API.
    pub fn api(&self) -> Result<StorefrontApi> {
        let client = FetchClient::with_timeout(Duration::from_secs(self.config.api.timeout_secs))?
            .with_base_url(self.config.api.base_url.clone());
        Ok(StorefrontApi::new(client))
    }
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
