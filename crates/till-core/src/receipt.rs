//! # Receipt Text
//!
//! Fixed-width plain-text rendering of an order: the order-details panel on
//! the terminal and the body of a printed invoice or quotation.
//!
//! ```text
//!            Corner Stationery
//! ------------------------------------------
//! Notebook A5 x2                      $20.00
//! Gel pen, black x1                    $5.00
//! ------------------------------------------
//! Subtotal                            $25.00
//! Shipping                            $35.00
//! Tax (15%)                            $3.75
//! Discount (5%)                       -$1.25
//! ------------------------------------------
//! TOTAL                               $62.50
//! ```
//!
//! Every amount is printed with two decimals, including tax and discount.

use crate::store::CartSnapshot;
use crate::types::Rate;

/// Common thermal paper width in characters.
pub const DEFAULT_RECEIPT_WIDTH: usize = 42;

/// Narrowest width that still fits a label and an amount.
pub const MIN_RECEIPT_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLayout {
    pub width: usize,
    pub currency_symbol: String,
    pub title: Option<String>,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            width: DEFAULT_RECEIPT_WIDTH,
            currency_symbol: "$".to_string(),
            title: None,
        }
    }
}

impl ReceiptLayout {
    fn width(&self) -> usize {
        self.width.max(MIN_RECEIPT_WIDTH)
    }
}

/// Renders the order summary for a cart snapshot.
pub fn render_order_summary(snapshot: &CartSnapshot, layout: &ReceiptLayout) -> String {
    let width = layout.width();
    let rule = "-".repeat(width);
    let money = |m: crate::Money| m.format_with(&layout.currency_symbol);
    let totals = &snapshot.totals;

    let mut lines = Vec::with_capacity(snapshot.items.len() + 10);

    if let Some(title) = &layout.title {
        lines.push(center(title, width));
    }
    lines.push(rule.clone());

    if snapshot.items.is_empty() {
        lines.push("(cart is empty)".to_string());
    }
    for item in &snapshot.items {
        let label = format!("{} x{}", item.product.name, item.quantity);
        lines.push(columns(&label, &money(item.line_total()), width));
    }

    lines.push(rule.clone());
    lines.push(columns("Subtotal", &money(totals.subtotal), width));
    lines.push(columns("Shipping", &money(totals.shipping), width));
    lines.push(columns(
        &format!("Tax ({})", format_percentage(snapshot.pricing.tax_rate)),
        &money(totals.tax),
        width,
    ));
    lines.push(columns(
        &format!("Discount ({})", format_percentage(snapshot.pricing.discount_rate)),
        &money(-totals.discount),
        width,
    ));
    lines.push(rule);
    lines.push(columns("TOTAL", &money(totals.grand_total), width));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `1500` → `15%`, `850` → `8.5%`, `825` → `8.25%`.
pub fn format_percentage(rate: Rate) -> String {
    let whole = rate.bps() / 100;
    let frac = rate.bps() % 100;
    if frac == 0 {
        format!("{}%", whole)
    } else if frac % 10 == 0 {
        format!("{}.{}%", whole, frac / 10)
    } else {
        format!("{}.{:02}%", whole, frac)
    }
}

/// Left label, right-aligned value. Long labels are cut to fit.
fn columns(left: &str, right: &str, width: usize) -> String {
    let right_len = right.chars().count();
    let room = width.saturating_sub(right_len + 1);
    let left: String = left.chars().take(room).collect();
    let gap = width.saturating_sub(left.chars().count() + right_len).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CartStore, Money, PricingConfig, Product};

    fn scenario_store() -> CartStore {
        let store = CartStore::new(PricingConfig::default());
        let a = Product::new("A", "Notebook A5", 1000, 10);
        let b = Product::new("B", "Gel pen, black", 500, 10);
        store.add_item(&a);
        store.add_item(&a);
        store.add_item(&b);
        store
    }

    #[test]
    fn test_renders_scenario_with_two_decimals() {
        let layout = ReceiptLayout {
            title: Some("Corner Stationery".to_string()),
            ..ReceiptLayout::default()
        };
        let text = render_order_summary(&scenario_store().snapshot(), &layout);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Corner Stationery");
        assert!(lines[2].starts_with("Notebook A5 x2"));
        assert!(lines[2].ends_with("$20.00"));
        assert!(lines.contains(&"Subtotal                            $25.00"));
        assert!(lines.contains(&"Tax (15%)                            $3.75"));
        assert!(lines.contains(&"Discount (5%)                       -$1.25"));
        assert_eq!(lines.last(), Some(&"TOTAL                               $62.50"));
        assert!(lines.iter().all(|l| l.chars().count() <= DEFAULT_RECEIPT_WIDTH));
    }

    #[test]
    fn test_empty_cart_summary() {
        let store = CartStore::new(PricingConfig::none());
        let text = render_order_summary(&store.snapshot(), &ReceiptLayout::default());
        assert!(text.contains("(cart is empty)"));
        assert!(text.contains("Discount (0%)"));
        assert!(text.trim_end().ends_with("$0.00"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let store = CartStore::new(PricingConfig::none());
        let name = "Extremely long product name that will never fit on paper";
        store.add_item(&Product::new("L", name, 123_456, 1));

        let layout = ReceiptLayout {
            width: 30,
            ..ReceiptLayout::default()
        };
        let text = render_order_summary(&store.snapshot(), &layout);
        let item_line = text.lines().nth(1).unwrap();
        assert_eq!(item_line.chars().count(), 30);
        assert!(item_line.ends_with(" $1234.56"));
    }

    #[test]
    fn test_currency_symbol_and_min_width() {
        let layout = ReceiptLayout {
            width: 5,
            currency_symbol: "€".to_string(),
            title: None,
        };
        let text = render_order_summary(&scenario_store().snapshot(), &layout);
        assert!(text.contains("€62.50"));
        assert!(text.lines().all(|l| l.chars().count() <= MIN_RECEIPT_WIDTH));
        assert_eq!(Money::from_cents(6250).format_with("€"), "€62.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Rate::from_bps(1500)), "15%");
        assert_eq!(format_percentage(Rate::from_bps(850)), "8.5%");
        assert_eq!(format_percentage(Rate::from_bps(825)), "8.25%");
        assert_eq!(format_percentage(Rate::from_bps(5)), "0.05%");
    }
}
