//! # Error Types
//!
//! Domain error types for till-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog JSON ──► Catalog::from_json ──► CoreError::Catalog / Validation│
//! │  Env / file   ──► PricingConfig::validate ──► ValidationError           │
//! │                                                                         │
//! │  Cart / CartStore mutators ──► never fail (total functions)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything that can go wrong happens at the boundary, before a product or
//! a rate reaches the cart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while loading catalog data or configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog document could not be parsed.
    #[error("Invalid catalog document: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Two catalog entries share an id, so cart lines would be ambiguous.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A product id was looked up but is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures for a single field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must not be negative")]
    Negative { field: String },

    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateProduct("p-1".to_string());
        assert_eq!(err.to_string(), "Duplicate product id in catalog: p-1");

        let err = CoreError::ProductNotFound("p-404".to_string());
        assert_eq!(err.to_string(), "Product not found: p-404");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "tax_rate must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let err: CoreError = ValidationError::Negative {
            field: "price".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: price must not be negative");
    }
}
