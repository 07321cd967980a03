//! # Validation Module
//!
//! Boundary checks for catalog records and pricing configuration.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Catalog / config loading                                      │
//! │  └── THIS MODULE: reject bad ids, names, prices, rates                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart                                                          │
//! │  └── Total functions, every input has defined behavior                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_price_cents, validate_rate};
//! use till_core::types::Rate;
//!
//! assert!(validate_price_cents(1099).is_ok());
//! assert!(validate_rate("tax_rate", Rate::from_bps(1500)).is_ok());
//! assert!(validate_rate("tax_rate", Rate::from_bps(10_001)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, Rate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;
const MAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog product id.
///
/// - Must not be blank
/// - At most 64 characters
/// - No whitespace (ids are typed at the terminal as single tokens)
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax or discount rate: 0% to 100%.
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > MAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

pub fn validate_shipping(shipping: Money) -> ValidationResult<()> {
    if shipping.is_negative() {
        return Err(ValidationError::Negative {
            field: "shipping".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a catalog product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_stock(product.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("p-1").is_ok());
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Brake Pads (front)").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_length_limits_count_characters() {
        // 200 two-byte characters is 400 bytes but still within the limit
        assert!(validate_product_name(&"é".repeat(200)).is_ok());
        assert_eq!(
            validate_product_name(&"é".repeat(201)),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: 200
            })
        );
        assert!(validate_product_id(&"ü".repeat(64)).is_ok());
        assert!(validate_product_id(&"ü".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(-1).is_err());
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-3).is_err());
        assert!(validate_shipping(Money::from_cents(3500)).is_ok());
        assert!(validate_shipping(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_rate_bounds() {
        assert!(validate_rate("discount_rate", Rate::zero()).is_ok());
        assert!(validate_rate("discount_rate", Rate::from_bps(10_000)).is_ok());

        let err = validate_rate("discount_rate", Rate::from_bps(12_000)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "discount_rate".to_string(),
                min: 0,
                max: 10_000,
            }
        );
    }

    #[test]
    fn test_validate_product_reports_first_failure() {
        let mut product = Product::new("p-1", "", -5, 0);
        assert!(matches!(
            validate_product(&product),
            Err(ValidationError::Required { .. })
        ));

        product.name = "Glue".to_string();
        assert!(matches!(
            validate_product(&product),
            Err(ValidationError::Negative { .. })
        ));

        product.price_cents = 120;
        assert!(validate_product(&product).is_ok());
    }
}
