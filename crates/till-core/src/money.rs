//! # Money Module
//!
//! The `Money` type every cart amount flows through.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Browser carts usually keep prices as JS numbers:                       │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    subtotal × 0.15 drifts a little further on every recompute           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Subtotal is an exact integer sum                                     │
//! │    Tax / discount are rounded ONCE, to the cent                         │
//! │    Grand total is the exact sum of the displayed parts                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Arithmetic saturates at `i64::MIN`/`i64::MAX` cents instead of panicking
//! or wrapping. Quantities are unbounded, so a mistyped quantity pins the
//! total at the limit; every amount below the limit is exact.
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//! use till_core::types::Rate;
//!
//! let price = Money::from_cents(1000);            // $10.00
//! let line = price * 2;                           // $20.00
//! let tax = line.apply_rate(Rate::from_bps(1500)); // 15%
//! assert_eq!(tax.cents(), 300);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

/// Basis points in one whole (100%).
const BPS_PER_UNIT: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► LineItem.line_total ──► Cart.subtotal
///                                                      │
///                         ┌────────────────────────────┼──────────────┐
///                         ▼                            ▼              ▼
///                     Cart.tax                   Cart.discount   Cart.shipping
///                         └──────────────┬─────────────┴──────────────┘
///                                        ▼
///                                Cart.grand_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The largest representable amount; saturated totals stop here.
    pub const MAX: Money = Money(i64::MAX);

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` limits.
    ///
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let line_total = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    ///
    /// let absurd = Money::from_cents(1000).multiply_quantity(i64::MAX);
    /// assert_eq!(absurd, Money::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a fractional rate (tax, discount) and rounds to the cent.
    ///
    /// Rounding is half away from zero, so a negative amount mirrors the
    /// positive one exactly.
    ///
    /// ```rust
    /// use till_core::money::Money;
    /// use till_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(2500);  // $25.00
    /// let tax = subtotal.apply_rate(Rate::from_bps(1500));
    /// assert_eq!(tax.cents(), 375);            // $3.75
    ///
    /// // $10.00 × 8.25% = $0.825 → $0.83
    /// let tax = Money::from_cents(1000).apply_rate(Rate::from_bps(825));
    /// assert_eq!(tax.cents(), 83);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        // i128 so a large subtotal times 10_000 bps cannot overflow
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = BPS_PER_UNIT / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / BPS_PER_UNIT
        } else {
            (scaled - half) / BPS_PER_UNIT
        };
        // Rates above 100% can push past the i64 range
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Formats with an arbitrary currency symbol and two decimals.
    ///
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(6250).format_with("€"), "€62.50");
    /// assert_eq!(Money::from_cents(-125).format_with("$"), "-$1.25");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly `$D.CC`. Hosts with another currency use [`Money::format_with`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

/// Quantity multiplication.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
