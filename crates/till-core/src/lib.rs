//! # till-core: Cart and Order Totals for Till POS
//!
//! Pure business logic behind the point-of-sale screen: the cart a cashier
//! fills, and the subtotal / tax / discount / shipping / grand total shown
//! beside it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Till POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             POS views (browser or till-terminal)                │   │
//! │  │   Product cards ──► Order sidebar ──► Order details ──► Print  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStore handle                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │   cart   │ │  store   │ │ receipt  │          │   │
//! │  │   │  Money   │ │   Cart   │ │CartStore │ │  text    │          │   │
//! │  │   │  Rate    │ │ LineItem │ │ Snapshot │ │  layout  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and `Rate`
//! - [`money`] - integer-cent `Money`
//! - [`pricing`] - shipping, tax rate and discount rate constants
//! - [`cart`] - line items and derived totals
//! - [`store`] - shared, observable handle to the active cart
//! - [`catalog`] - validated product list
//! - [`receipt`] - plain-text order summary
//! - [`validation`] / [`error`] - boundary checks and their errors
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{CartStore, PricingConfig, Product};
//!
//! let store = CartStore::new(PricingConfig::default()); // $35 shipping, 15% tax, 5% off
//! let notebook = Product::new("A", "Notebook A5", 1000, 40);
//! let pen = Product::new("B", "Gel pen", 500, 120);
//!
//! store.add_item(&notebook);
//! store.add_item(&notebook);
//! store.add_item(&pen);
//!
//! let totals = store.totals();
//! assert_eq!(totals.subtotal.cents(), 2500);
//! assert_eq!(totals.tax.cents(), 375);
//! assert_eq!(totals.discount.cents(), 125);
//! assert_eq!(totals.grand_total.cents(), 6250);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod store;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartChange, CartTotals, LineItem};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PricingConfig;
pub use receipt::{render_order_summary, ReceiptLayout};
pub use store::{CartSnapshot, CartStore, SubscriptionId};
pub use types::{Product, Rate};
