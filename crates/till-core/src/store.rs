//! # Cart Store
//!
//! A shareable handle to the active cart that re-publishes its state to
//! every subscribed view after each change.
//!
//! ## Who Holds the Store
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         POS screen session                              │
//! │                                                                         │
//! │   ProductCard ──┐                                   ┌──► OrderSidebar   │
//! │   OrderDetails ─┼── store.add_item / remove_item ──►│                   │
//! │   Checkout ─────┘   update_quantity / clear_cart    ├──► OrderDetails   │
//! │                              │                      │                   │
//! │                              ▼                      └──► Receipt view   │
//! │                     ┌────────────────┐                                  │
//! │                     │   CartStore    │── notify(change, snapshot) ──►   │
//! │                     │  Arc<Mutex<    │                                  │
//! │                     │    Cart>>      │                                  │
//! │                     └────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handle is passed explicitly to whoever needs it; there is no global
//! cart. Cloning the handle shares the same cart.
//!
//! ## Notification Rules
//! - Subscribers run synchronously, after the mutation, in subscription order
//! - They always receive the full snapshot (items + totals), never a diff
//! - No-op mutations (`CartChange::Unchanged`) are not published
//! - The cart lock is released before subscribers run, so a subscriber may
//!   read from or write to the store

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartChange, CartTotals, LineItem};
use crate::pricing::PricingConfig;
use crate::types::Product;

/// Everything a view needs to render the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    #[ts(as = "String")]
    pub cart_id: Uuid,
    pub items: Vec<LineItem>,
    pub pricing: PricingConfig,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            cart_id: cart.id(),
            items: cart.items().to_vec(),
            pricing: *cart.pricing(),
            totals: cart.totals(),
        }
    }
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&CartChange, &CartSnapshot) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<Vec<(SubscriptionId, Listener)>>,
}

/// Shared, observable cart for one POS session.
#[derive(Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    listeners: Arc<Listeners>,
}

impl CartStore {
    /// Creates a store around an empty cart.
    pub fn new(pricing: PricingConfig) -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new(pricing))),
            listeners: Arc::new(Listeners::default()),
        }
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    pub fn add_item(&self, product: &Product) -> CartChange {
        debug!(product_id = %product.id, "add_item");
        self.mutate(|cart| cart.add_item(product))
    }

    pub fn remove_item(&self, product_id: &str) -> CartChange {
        debug!(product_id = %product_id, "remove_item");
        self.mutate(|cart| cart.remove_item(product_id))
    }

    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> CartChange {
        debug!(product_id = %product_id, quantity, "update_quantity");
        self.mutate(|cart| cart.update_quantity(product_id, quantity))
    }

    pub fn clear_cart(&self) -> CartChange {
        debug!("clear_cart");
        self.mutate(Cart::clear)
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// Executes a function with read access to the cart.
    ///
    /// ```rust
    /// use till_core::{CartStore, PricingConfig};
    ///
    /// let store = CartStore::new(PricingConfig::default());
    /// let empty = store.with_cart(|cart| cart.is_empty());
    /// assert!(empty);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&*self.lock_cart())
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }

    pub fn totals(&self) -> CartTotals {
        self.with_cart(Cart::totals)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a view to be called after every change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartChange, &CartSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.listeners.next_id.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(listener);
        self.lock_listeners().push((id, listener));
        trace!(subscription = id.0, "subscribed");
        id
    }

    /// Removes a view. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.lock_listeners();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_listeners().len()
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn mutate<F>(&self, f: F) -> CartChange
    where
        F: FnOnce(&mut Cart) -> CartChange,
    {
        let (change, snapshot) = {
            let mut cart = self.lock_cart();
            let change = f(&mut *cart);
            if !change.is_change() {
                return change;
            }
            (change, CartSnapshot::from(&*cart))
        };

        debug!(
            ?change,
            items = snapshot.totals.item_count,
            grand_total = snapshot.totals.grand_total.cents(),
            "cart changed"
        );
        self.notify(&change, &snapshot);
        change
    }

    fn notify(&self, change: &CartChange, snapshot: &CartSnapshot) {
        // Listeners are cloned out so none of them runs under the lock.
        let listeners: Vec<Listener> = self
            .lock_listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(change, snapshot);
        }
    }

    // Cart mutators and totals saturate instead of overflowing, so only a
    // panicking `with_cart` reader can poison the lock, and readers never
    // write.
    fn lock_cart(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.listeners
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        CartStore::new(PricingConfig::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &*self.lock_cart())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
