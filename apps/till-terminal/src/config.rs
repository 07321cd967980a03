//! # Terminal Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL_*`)
//! 2. Defaults (this file)
//!
//! | Variable              | Example        | Meaning                          |
//! |-----------------------|----------------|----------------------------------|
//! | `TILL_STORE_NAME`     | `Corner Shop`  | Title on the order summary       |
//! | `TILL_CURRENCY_SYMBOL`| `€`            | Symbol used when printing money  |
//! | `TILL_TAX_RATE`       | `15` / `8.25`  | Tax, in percent                  |
//! | `TILL_DISCOUNT_RATE`  | `5`            | Order discount, in percent       |
//! | `TILL_SHIPPING`       | `35.00`        | Flat shipping, in currency units |
//! | `TILL_CATALOG_PATH`   | `catalog.json` | Product list; demo list if unset |
//! | `TILL_RECEIPT_WIDTH`  | `42`           | Characters per summary line      |
//!
//! Unlike a silently ignored typo, a malformed value stops startup.

use std::path::PathBuf;

use till_core::pricing::PricingConfig;
use till_core::receipt::{ReceiptLayout, DEFAULT_RECEIPT_WIDTH, MIN_RECEIPT_WIDTH};
use till_core::{Money, Rate};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalConfig {
    pub store_name: String,
    pub currency_symbol: String,
    pub pricing: PricingConfig,
    pub catalog_path: Option<PathBuf>,
    pub receipt_width: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "Till POS".to_string(),
            currency_symbol: "$".to_string(),
            pricing: PricingConfig::default(),
            catalog_path: None,
            receipt_width: DEFAULT_RECEIPT_WIDTH,
        }
    }
}

impl TerminalConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TerminalConfig::default();

        if let Some(name) = lookup("TILL_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("TILL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("TILL_TAX_RATE") {
            config.pricing.tax_rate = parse_percentage("TILL_TAX_RATE", &raw)?;
        }

        if let Some(raw) = lookup("TILL_DISCOUNT_RATE") {
            config.pricing.discount_rate = parse_percentage("TILL_DISCOUNT_RATE", &raw)?;
        }

        if let Some(raw) = lookup("TILL_SHIPPING") {
            config.pricing.shipping = parse_amount("TILL_SHIPPING", &raw)?;
        }

        if let Some(path) = lookup("TILL_CATALOG_PATH") {
            if !path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        if let Some(raw) = lookup("TILL_RECEIPT_WIDTH") {
            config.receipt_width = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|w| *w >= MIN_RECEIPT_WIDTH)
                .ok_or_else(|| {
                    ConfigError::new(
                        "TILL_RECEIPT_WIDTH",
                        &raw,
                        format!("expected a whole number >= {}", MIN_RECEIPT_WIDTH),
                    )
                })?;
        }

        config
            .pricing
            .validate()
            .map_err(|e| ConfigError::new("pricing", "", e.to_string()))?;

        Ok(config)
    }

    pub fn receipt_layout(&self) -> ReceiptLayout {
        ReceiptLayout {
            width: self.receipt_width,
            currency_symbol: self.currency_symbol.clone(),
            title: Some(self.store_name.clone()),
        }
    }
}

/// `"15"` → 15%, `"8.25"` → 8.25%. Must be within 0-100.
fn parse_percentage(key: &str, raw: &str) -> Result<Rate, ConfigError> {
    let pct: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::new(key, raw, "expected a percentage such as 15 or 8.25"))?;

    if !(0.0..=100.0).contains(&pct) {
        return Err(ConfigError::new(key, raw, "must be between 0 and 100"));
    }

    Ok(Rate::from_percentage(pct))
}

/// `"35"` → $35.00, `"35.5"` → $35.50. At most two decimals, never negative.
fn parse_amount(key: &str, raw: &str) -> Result<Money, ConfigError> {
    let invalid = || ConfigError::new(key, raw, "expected an amount such as 35 or 35.00");
    let text = raw.trim();

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    if whole.is_empty()
        || frac.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let major: i64 = whole.parse().map_err(|_| invalid())?;
    let minor: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => frac.parse().map_err(|_| invalid())?,
    };

    major
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(minor))
        .map(Money::from_cents)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<TerminalConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TerminalConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, TerminalConfig::default());
        assert_eq!(config.pricing.shipping.cents(), 3500);
        assert_eq!(config.pricing.tax_rate.bps(), 1500);
        assert_eq!(config.pricing.discount_rate.bps(), 500);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TILL_STORE_NAME", "Corner Stationery"),
            ("TILL_CURRENCY_SYMBOL", "€"),
            ("TILL_TAX_RATE", "8.25"),
            ("TILL_DISCOUNT_RATE", "0"),
            ("TILL_SHIPPING", "4.5"),
            ("TILL_CATALOG_PATH", "/srv/catalog.json"),
            ("TILL_RECEIPT_WIDTH", "32"),
        ])
        .unwrap();

        assert_eq!(config.store_name, "Corner Stationery");
        assert_eq!(config.pricing.tax_rate.bps(), 825);
        assert!(config.pricing.discount_rate.is_zero());
        assert_eq!(config.pricing.shipping.cents(), 450);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));

        let layout = config.receipt_layout();
        assert_eq!(layout.width, 32);
        assert_eq!(layout.currency_symbol, "€");
        assert_eq!(layout.title.as_deref(), Some("Corner Stationery"));
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = config_from(&[("TILL_TAX_RATE", "fifteen")]).unwrap_err();
        assert_eq!(err.key, "TILL_TAX_RATE");

        assert!(config_from(&[("TILL_DISCOUNT_RATE", "120")]).is_err());
        assert!(config_from(&[("TILL_SHIPPING", "-3")]).is_err());
        assert!(config_from(&[("TILL_RECEIPT_WIDTH", "10")]).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("K", "35").unwrap().cents(), 3500);
        assert_eq!(parse_amount("K", "35.00").unwrap().cents(), 3500);
        assert_eq!(parse_amount("K", "35.5").unwrap().cents(), 3550);
        assert_eq!(parse_amount("K", " 0.05 ").unwrap().cents(), 5);

        assert!(parse_amount("K", "").is_err());
        assert!(parse_amount("K", ".5").is_err());
        assert!(parse_amount("K", "1.234").is_err());
        assert!(parse_amount("K", "1,50").is_err());
        assert!(parse_amount("K", "99999999999999999999").is_err());
    }
}
