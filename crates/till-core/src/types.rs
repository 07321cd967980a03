//! # Domain Types
//!
//! Catalog-facing types shared by the cart and the presentation layer.
//!
//! ```text
//! ┌─────────────────┐        ┌─────────────────┐
//! │    Product      │        │      Rate       │
//! │  ─────────────  │        │  ─────────────  │
//! │  id (cart key)  │        │  bps (u32)      │
//! │  sku            │        │  1500 = 15%     │
//! │  name           │        └─────────────────┘
//! │  price_cents    │
//! │  stock          │
//! └─────────────────┘
//! ```
//!
//! The catalog owns products. The cart only ever holds a snapshot copy.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A fractional rate in basis points (1 bps = 0.01%).
///
/// Used for both the tax rate and the discount rate applied to a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a fraction (`0.15` → 15%).
    ///
    /// Negative and NaN inputs collapse to zero; validation rejects them
    /// before they get this far.
    pub fn from_fraction(fraction: f64) -> Self {
        Rate((fraction * 10_000.0).round().max(0.0) as u32)
    }

    /// Creates a rate from a percentage (`15.0` → 15%).
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round().max(0.0) as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry as served by the backend.
///
/// `stock` is informational only: the cart never refuses an add because of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, unique per catalog. Cart lines are keyed by it.
    pub id: String,

    /// Stock Keeping Unit.
    #[serde(default)]
    pub sku: Option<String>,

    /// Display name shown on the product card and the receipt.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Units on hand according to the catalog.
    #[serde(default)]
    pub stock: i64,
}

impl Product {
    /// Creates a product with no SKU.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64, stock: i64) -> Self {
        Product {
            id: id.into(),
            sku: None,
            name: name.into(),
            price_cents,
            stock,
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether the catalog has at least `quantity` units on hand.
    ///
    /// Product cards use this for the "out of stock" badge.
    pub fn in_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
