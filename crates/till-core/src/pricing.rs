//! # Pricing Configuration
//!
//! The constants a cart applies on top of its subtotal: a flat shipping
//! surcharge, a tax rate and a discount rate.
//!
//! ```text
//! grand_total = subtotal + shipping + subtotal × tax_rate − subtotal × discount_rate
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Rate;
use crate::validation::{validate_rate, validate_shipping, ValidationResult};

/// Flat shipping surcharge used when nothing else is configured ($35.00).
pub const DEFAULT_SHIPPING_CENTS: i64 = 3_500;

/// Default tax rate (15%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 1_500;

/// Default order discount (5%).
pub const DEFAULT_DISCOUNT_RATE_BPS: u32 = 500;

/// Order-level pricing constants. Not derived from the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingConfig {
    pub shipping: Money,
    pub tax_rate: Rate,
    pub discount_rate: Rate,
}

impl PricingConfig {
    pub fn new(shipping: Money, tax_rate: Rate, discount_rate: Rate) -> Self {
        PricingConfig {
            shipping,
            tax_rate,
            discount_rate,
        }
    }

    /// No shipping, no tax, no discount. Grand total equals subtotal.
    pub fn none() -> Self {
        PricingConfig::new(Money::zero(), Rate::zero(), Rate::zero())
    }

    /// Checks both rates are within 0-100% and shipping is not negative.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_shipping(self.shipping)?;
        validate_rate("tax_rate", self.tax_rate)?;
        validate_rate("discount_rate", self.discount_rate)?;
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig::new(
            Money::from_cents(DEFAULT_SHIPPING_CENTS),
            Rate::from_bps(DEFAULT_TAX_RATE_BPS),
            Rate::from_bps(DEFAULT_DISCOUNT_RATE_BPS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.shipping.cents(), 3500);
        assert_eq!(pricing.tax_rate.bps(), 1500);
        assert_eq!(pricing.discount_rate.bps(), 500);
        assert!(pricing.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut pricing = PricingConfig::none();
        assert!(pricing.validate().is_ok());

        pricing.tax_rate = Rate::from_bps(10_001);
        assert!(pricing.validate().is_err());

        pricing.tax_rate = Rate::zero();
        pricing.shipping = Money::from_cents(-100);
        assert!(pricing.validate().is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(PricingConfig::default()).unwrap();
        assert_eq!(json["shipping"], 3500);
        assert_eq!(json["taxRate"], 1500);
        assert_eq!(json["discountRate"], 500);
    }
}
