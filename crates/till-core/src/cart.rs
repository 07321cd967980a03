//! # Cart
//!
//! The active order: line items keyed by product id, plus the totals derived
//! from them.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cashier gesture          Cart operation             Line item change   │
//! │  ───────────────          ──────────────             ────────────────   │
//! │                                                                         │
//! │  Tap product card ──────► add_item(product) ───────► qty + 1 / append   │
//! │                                                                         │
//! │  Tap "−" ───────────────► remove_item(id) ─────────► qty − 1 / delete   │
//! │                                                                         │
//! │  Type a quantity ───────► update_quantity(id, n) ──► qty = n / delete   │
//! │                                                                         │
//! │  Cancel order ──────────► clear() ─────────────────► all lines gone     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per product id, in the order first added
//! - Every line item has `quantity >= 1`
//! - Every operation is total: unknown ids and non-positive quantities have
//!   defined outcomes, nothing returns an error

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing::PricingConfig;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// A product and how many of it are in the cart.
///
/// `product` is a copy taken when the line was created, so later catalog
/// edits do not move prices under a cart that is already on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub product: Product,
    pub quantity: i64,
}

impl LineItem {
    fn new(product: Product) -> Self {
        LineItem {
            product,
            quantity: 1,
        }
    }

    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Change
// =============================================================================

/// What a mutator actually did.
///
/// Hosts use this for logging and to skip re-rendering on no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    #[serde(rename_all = "camelCase")]
    Added { product_id: String },
    /// An existing line went up by one.
    #[serde(rename_all = "camelCase")]
    Incremented { product_id: String, quantity: i64 },
    /// An existing line went down by one and is still present.
    #[serde(rename_all = "camelCase")]
    Decremented { product_id: String, quantity: i64 },
    /// A line was deleted.
    #[serde(rename_all = "camelCase")]
    Removed { product_id: String },
    /// A line's quantity was set to an exact value.
    #[serde(rename_all = "camelCase")]
    QuantitySet { product_id: String, quantity: i64 },
    /// Every line was dropped.
    #[serde(rename_all = "camelCase")]
    Cleared { removed_lines: usize },
    /// Nothing matched; the cart is exactly as before.
    Unchanged,
}

impl CartChange {
    /// Whether observers need to hear about this change.
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-memory cart for one active order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    id: Uuid,
    items: Vec<LineItem>,
    pricing: PricingConfig,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart with the given pricing constants.
    pub fn new(pricing: PricingConfig) -> Self {
        Cart {
            id: Uuid::new_v4(),
            items: Vec::new(),
            pricing,
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Adds one unit of `product`.
    ///
    /// - Already in the cart: quantity + 1
    /// - Not in the cart: appended with quantity 1
    ///
    /// There is no stock check here. A line already at `i64::MAX` stays
    /// there and the call reports [`CartChange::Unchanged`].
    pub fn add_item(&mut self, product: &Product) -> CartChange {
        if let Some(item) = self.find_mut(&product.id) {
            let Some(quantity) = item.quantity.checked_add(1) else {
                return CartChange::Unchanged;
            };
            item.quantity = quantity;
            return CartChange::Incremented {
                product_id: product.id.clone(),
                quantity: item.quantity,
            };
        }

        self.items.push(LineItem::new(product.clone()));
        CartChange::Added {
            product_id: product.id.clone(),
        }
    }

    /// Takes one unit of `product_id` out of the cart.
    ///
    /// Removing the last unit deletes the line. Unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: &str) -> CartChange {
        let Some(index) = self.position(product_id) else {
            return CartChange::Unchanged;
        };

        if self.items[index].quantity > 1 {
            let item = &mut self.items[index];
            item.quantity -= 1;
            return CartChange::Decremented {
                product_id: product_id.to_string(),
                quantity: item.quantity,
            };
        }

        self.items.remove(index);
        CartChange::Removed {
            product_id: product_id.to_string(),
        }
    }

    /// Sets the quantity of an existing line to exactly `quantity`.
    ///
    /// - `quantity <= 0`: the line is deleted
    /// - unknown id: no-op, a line is never created here
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CartChange {
        let Some(index) = self.position(product_id) else {
            return CartChange::Unchanged;
        };

        if quantity <= 0 {
            self.items.remove(index);
            return CartChange::Removed {
                product_id: product_id.to_string(),
            };
        }

        let item = &mut self.items[index];
        if item.quantity == quantity {
            return CartChange::Unchanged;
        }
        item.quantity = quantity;
        CartChange::QuantitySet {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    /// Drops every line and starts a fresh order id.
    pub fn clear(&mut self) -> CartChange {
        let removed_lines = self.items.len();
        self.items.clear();
        self.id = Uuid::new_v4();
        self.created_at = Utc::now();
        CartChange::Cleared { removed_lines }
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, i| total.saturating_add(i.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -------------------------------------------------------------------------
    // Derived totals
    // -------------------------------------------------------------------------

    /// Σ unit price × quantity, exact below the [`Money`] saturation limit.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Flat surcharge, independent of the items.
    pub fn shipping(&self) -> Money {
        self.pricing.shipping
    }

    /// `subtotal × tax_rate`, rounded to the cent.
    pub fn tax(&self) -> Money {
        self.subtotal().apply_rate(self.pricing.tax_rate)
    }

    /// `subtotal × discount_rate`, rounded to the cent.
    pub fn discount(&self) -> Money {
        self.subtotal().apply_rate(self.pricing.discount_rate)
    }

    /// `subtotal + shipping + tax − discount`.
    ///
    /// Shipping is charged even on an empty cart, matching the order panel.
    pub fn grand_total(&self) -> Money {
        self.totals().grand_total
    }

    /// Every derived figure, computed from the same cart state.
    ///
    /// Tax and discount are derived from one subtotal, so they always
    /// agree with the `subtotal` field.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = self.shipping();
        let tax = subtotal.apply_rate(self.pricing.tax_rate);
        let discount = subtotal.apply_rate(self.pricing.discount_rate);

        CartTotals {
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            shipping,
            tax,
            discount,
            grand_total: subtotal + shipping + tax - discount,
        }
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.product.id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new(PricingConfig::default())
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the order sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub discount: Money,
    pub grand_total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
