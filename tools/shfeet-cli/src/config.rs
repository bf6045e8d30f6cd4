//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shfeet_commerce::cart::{
    DeliveryFeePolicy, FEW_ITEMS_FEE_NAIRA, FEW_ITEMS_LIMIT, FREE_DELIVERY_THRESHOLD_NAIRA,
    MANY_ITEMS_FEE_NAIRA,
};
use shfeet_commerce::{Currency, Money};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shfeet.toml", ".shfeet.toml", "shfeet.json"];

/// Overrides `payment.public_key`.
pub const PUBLIC_KEY_ENV: &str = "SHFEET_PAYSTACK_PUBLIC_KEY";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub payment: PaymentConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Look for a config file in `start` and each of its parents.
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Self)>> {
        for dir in start.ancestors() {
            for name in CONFIG_FILE_NAMES {
                let path = dir.join(name);
                if path.is_file() {
                    let config = Self::load(&path)?;
                    return Ok(Some((path, config)));
                }
            }
        }
        Ok(None)
    }

    /// Apply environment overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var(PUBLIC_KEY_ENV) {
            if !key.trim().is_empty() {
                self.payment.public_key = key.trim().to_string();
            }
        }
        self
    }

    /// Currency named by `payment.currency`.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.payment.currency)
            .with_context(|| format!("Unknown currency: {}", self.payment.currency))
    }

    /// Delivery pricing built from the `[delivery]` section.
    pub fn delivery_policy(&self) -> Result<DeliveryFeePolicy> {
        let currency = self.currency()?;
        let d = &self.delivery;
        DeliveryFeePolicy::new(
            Money::from_major(d.free_threshold, currency),
            Money::from_major(d.few_items_fee, currency),
            Money::from_major(d.many_items_fee, currency),
            d.few_items_limit,
        )
        .context("Invalid [delivery] settings")
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Where local state lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the persisted cart.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".shfeet".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Storefront API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    shfeet_data::DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    shfeet_data::DEFAULT_TIMEOUT.as_secs()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Payment gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Gateway public key. Never a secret key.
    #[serde(default)]
    pub public_key: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::NGN.code().to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            currency: default_currency(),
        }
    }
}

/// Delivery fee table, amounts in major units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_free_threshold")]
    pub free_threshold: i64,

    #[serde(default = "default_few_items_fee")]
    pub few_items_fee: i64,

    #[serde(default = "default_many_items_fee")]
    pub many_items_fee: i64,

    #[serde(default = "default_few_items_limit")]
    pub few_items_limit: u32,
}

fn default_free_threshold() -> i64 {
    FREE_DELIVERY_THRESHOLD_NAIRA
}

fn default_few_items_fee() -> i64 {
    FEW_ITEMS_FEE_NAIRA
}

fn default_many_items_fee() -> i64 {
    MANY_ITEMS_FEE_NAIRA
}

fn default_few_items_limit() -> u32 {
    FEW_ITEMS_LIMIT
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            free_threshold: default_free_threshold(),
            few_items_fee: default_few_items_fee(),
            many_items_fee: default_many_items_fee(),
            few_items_limit: default_few_items_limit(),
        }
    }
}

/// Log filter and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// `human` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default shfeet.toml.
pub fn generate_default_config() -> String {
    format!(
        r#"# SHFeet storefront configuration

[store]
data_dir = "{data_dir}"

[api]
base_url = "{base_url}"
timeout_secs = {timeout}

[payment]
# Or set {env}
public_key = ""
currency = "NGN"

[delivery]
free_threshold = {free}
few_items_fee = {few}
many_items_fee = {many}
few_items_limit = {limit}

[logging]
level = "warn"
format = "human"
"#,
        data_dir = default_data_dir(),
        base_url = default_base_url(),
        timeout = default_timeout_secs(),
        env = PUBLIC_KEY_ENV,
        free = FREE_DELIVERY_THRESHOLD_NAIRA,
        few = FEW_ITEMS_FEE_NAIRA,
        many = MANY_ITEMS_FEE_NAIRA,
        limit = FEW_ITEMS_LIMIT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.store.data_dir, ".shfeet");
        assert_eq!(config.api.base_url, shfeet_data::DEFAULT_API_BASE_URL);
        assert_eq!(config.delivery.few_items_fee, 1_000);
        assert_eq!(config.logging.format, "human");
        assert_eq!(config.delivery_policy().unwrap(), DeliveryFeePolicy::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [delivery]
            few_items_fee = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.delivery.few_items_fee, 1_500);
        assert_eq!(config.delivery.many_items_fee, 6_000);
        assert_eq!(config.payment.currency, "NGN");
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("shfeet.json"),
            r#"{"store": {"data_dir": "/tmp/cart"}}"#,
        )
        .unwrap();

        let (path, config) = CliConfig::discover(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join("shfeet.json"));
        assert_eq!(config.store.data_dir, "/tmp/cart");
    }

    #[test]
    fn test_bad_currency() {
        let mut config = CliConfig::default();
        config.payment.currency = "XYZ".into();
        assert!(config.delivery_policy().is_err());
    }
}
