//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FAIRWAY_HANDOFF_PATH` - JSON file holding the checkout hand-off
//!   (default: `.fairway/handoff.json`)
//! - `FAIRWAY_TAX_RATE` - Sales tax as a fraction (default: 0.08)
//! - `FAIRWAY_SERVICE_FEE` - Flat checkout fee in dollars (default: 1.00)
//! - `FAIRWAY_MENU_CATALOG` - YAML file replacing the built-in menu
//! - `FAIRWAY_PRO_SHOP_CATALOG` - YAML file replacing the built-in pro shop
//!   catalog

use std::path::PathBuf;
use std::str::FromStr;

use fairway_core::checkout::DEFAULT_SERVICE_FEE;
use fairway_core::{Money, Shop, TaxRate};
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_HANDOFF_PATH: &str = ".fairway/handoff.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Fairway CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where `quote` writes and `checkout` reads the hand-off
    pub handoff_path: PathBuf,
    /// Flat sales tax rate
    pub tax_rate: TaxRate,
    /// Fee added at checkout
    pub service_fee: Money,
    /// Menu catalog override
    pub menu_catalog: Option<PathBuf>,
    /// Pro shop catalog override
    pub pro_shop_catalog: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            handoff_path: PathBuf::from(DEFAULT_HANDOFF_PATH),
            tax_rate: TaxRate::DEFAULT,
            service_fee: DEFAULT_SERVICE_FEE,
            menu_catalog: None,
            pro_shop_catalog: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let handoff_path = lookup("FAIRWAY_HANDOFF_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_HANDOFF_PATH), PathBuf::from);

        let tax_rate = match lookup("FAIRWAY_TAX_RATE") {
            Some(raw) => TaxRate::from_str(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("FAIRWAY_TAX_RATE".to_string(), e.to_string())
            })?,
            None => TaxRate::DEFAULT,
        };

        let service_fee = match lookup("FAIRWAY_SERVICE_FEE") {
            Some(raw) => parse_fee(&raw).map_err(|reason| {
                ConfigError::InvalidEnvVar("FAIRWAY_SERVICE_FEE".to_string(), reason)
            })?,
            None => DEFAULT_SERVICE_FEE,
        };

        Ok(Self {
            handoff_path,
            tax_rate,
            service_fee,
            menu_catalog: lookup("FAIRWAY_MENU_CATALOG").map(PathBuf::from),
            pro_shop_catalog: lookup("FAIRWAY_PRO_SHOP_CATALOG").map(PathBuf::from),
        })
    }

    /// Catalog override for `shop`, if one is configured.
    #[must_use]
    pub fn catalog_path(&self, shop: Shop) -> Option<&PathBuf> {
        match shop {
            Shop::Menu => self.menu_catalog.as_ref(),
            Shop::ProShop => self.pro_shop_catalog.as_ref(),
        }
    }
}

fn parse_fee(raw: &str) -> Result<Money, String> {
    let amount = Decimal::from_str(raw.trim()).map_err(|e| e.to_string())?;
    let fee = Money::new(amount);
    if fee.is_negative() {
        return Err("must not be negative".to_string());
    }
    Ok(fee)
}
