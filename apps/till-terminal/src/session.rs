//! # Cashier Session
//!
//! Executes parsed commands against the catalog and the session's cart
//! store. Re-rendering after a change is not done here: the host subscribes
//! a view to the store and the store calls it.

use tracing::{info, warn};

use till_core::receipt::render_order_summary;
use till_core::{CartChange, CartStore, Catalog, ReceiptLayout};

use crate::command::{Command, HELP};

/// What the terminal should print after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The store already published the change; nothing more to print.
    Silent,
    Text(String),
    Quit,
}

pub struct Session {
    catalog: Catalog,
    store: CartStore,
    layout: ReceiptLayout,
}

impl Session {
    pub fn new(catalog: Catalog, store: CartStore, layout: ReceiptLayout) -> Self {
        Session {
            catalog,
            store,
            layout,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn execute(&self, command: Command) -> Reply {
        match command {
            Command::List => Reply::Text(self.render_catalog()),
            Command::Show => Reply::Text(self.render_summary()),
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
            Command::Add(id) => {
                let product = match self.catalog.require(&id) {
                    Ok(product) => product,
                    Err(err) => {
                        warn!(product_id = %id, "add for unknown product");
                        return Reply::Text(err.to_string());
                    }
                };
                let change = self.store.add_item(product);
                self.reply_for(change, &id)
            }
            Command::Remove(id) => {
                let change = self.store.remove_item(&id);
                self.reply_for(change, &id)
            }
            Command::Quantity(id, quantity) => {
                let change = self.store.update_quantity(&id, quantity);
                self.reply_for(change, &id)
            }
            Command::Clear => {
                let change = self.store.clear_cart();
                if let CartChange::Cleared { removed_lines } = change {
                    info!(removed_lines, "order cleared");
                }
                Reply::Silent
            }
        }
    }

    pub fn render_summary(&self) -> String {
        render_order_summary(&self.store.snapshot(), &self.layout)
    }

    fn reply_for(&self, change: CartChange, product_id: &str) -> Reply {
        if change.is_change() {
            return Reply::Silent;
        }

        match self.store.with_cart(|cart| cart.get(product_id).map(|i| i.quantity)) {
            Some(quantity) => Reply::Text(format!("{} already has quantity {}", product_id, quantity)),
            None => Reply::Text(format!("{} is not in the order", product_id)),
        }
    }

    fn render_catalog(&self) -> String {
        if self.catalog.is_empty() {
            return "(catalog is empty)".to_string();
        }

        let id_width = self
            .catalog
            .products()
            .iter()
            .map(|p| p.id.chars().count())
            .max()
            .unwrap_or(0);

        self.catalog
            .products()
            .iter()
            .map(|p| {
                let stock = if p.in_stock(1) {
                    format!("{} in stock", p.stock)
                } else {
                    "out of stock".to_string()
                };
                format!(
                    "{:<id_width$}  {}  {}  ({})",
                    p.id,
                    p.name,
                    p.price().format_with(&self.layout.currency_symbol),
                    stock,
                    id_width = id_width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
