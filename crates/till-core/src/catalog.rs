//! # Catalog
//!
//! The product list the POS screen sells from, as handed over by the
//! backend. The cart never looks products up itself; the host resolves an
//! id here and passes the record to [`crate::Cart::add_item`].
//!
//! ```rust
//! use till_core::Catalog;
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"id": "p-1", "name": "Notebook A5", "priceCents": 1000, "stock": 40},
//!     {"id": "p-2", "name": "Gel pen", "priceCents": 500, "stock": 120}
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get("p-2").map(|p| p.price_cents), Some(500));
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::validate_product;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every record and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// A small stationery catalog for demos and local runs.
    pub fn demo() -> Self {
        let products = vec![
            Product {
                sku: Some("NB-A5".to_string()),
                ..Product::new("notebook-a5", "Notebook A5", 1000, 40)
            },
            Product {
                sku: Some("PEN-GEL-BLK".to_string()),
                ..Product::new("gel-pen", "Gel pen, black", 500, 120)
            },
            Product {
                sku: Some("ST-24-6".to_string()),
                ..Product::new("stapler", "Stapler 24/6", 1450, 8)
            },
            Product::new("tape", "Packing tape 48mm", 325, 0),
        ];

        Catalog { products }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_demo_catalog_is_valid() {
        let demo = Catalog::demo();
        assert!(Catalog::new(demo.products().to_vec()).is_ok());
        assert!(!demo.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let products = vec![
            Product::new("p-1", "One", 100, 1),
            Product::new("p-1", "Also one", 200, 1),
        ];
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProduct(id) if id == "p-1"));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let err = Catalog::from_json(r#"[{"id":"p-1","name":"Bad","priceCents":-1}]"#).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Catalog(_)));
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = Catalog::demo();
        assert!(catalog.require("gel-pen").is_ok());
        assert!(matches!(
            catalog.require("nope"),
            Err(CoreError::ProductNotFound(id)) if id == "nope"
        ));
    }
}
