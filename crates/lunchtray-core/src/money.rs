//! # Money Module
//!
//! Integer money for the lunch tray order.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECTION CHURN WITH FLOATS                                           │
//! │                                                                         │
//! │  subtotal = 0.0                                                         │
//! │  + 7.00 (cauliflower) - 7.00 + 5.50 (pasta) - 5.50 + 4.00 (chili) ...   │
//! │  After enough swaps the subtotal is 3.9999999999999996  ❌              │
//! │                                                                         │
//! │  With cents:                                                            │
//! │  0 + 700 - 700 + 550 - 550 + 400 = 400  ✅ exact, every time            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lunchtray_core::money::Money;
//! use lunchtray_core::types::TaxRate;
//!
//! let subtotal = Money::from_major_minor(10, 0);          // $10.00
//! let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
//! assert_eq!(tax.cents(), 80);
//! assert_eq!((subtotal + tax).to_string(), "$10.80");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in cents.
///
/// Menu prices, the subtotal, the tax and the total are all `Money`.
/// Only the presentation boundary turns it into a currency string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use lunchtray_core::money::Money;
    ///
    /// let berries = Money::from_cents(100); // $1.00
    /// assert_eq!(berries.cents(), 100);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only `major` carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use lunchtray_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(5, 50).cents(), 550);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half-up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math only: `(amount * bps + 5000) / 10000`. The intermediate
    /// product is widened to `i128` so large amounts cannot overflow.
    ///
    /// ```rust
    /// use lunchtray_core::money::Money;
    /// use lunchtray_core::types::TaxRate;
    ///
    /// let rate = TaxRate::from_bps(800);
    /// assert_eq!(Money::from_cents(700).calculate_tax(rate).cents(), 56);
    /// // $0.50 × 8% = $0.04 exactly
    /// assert_eq!(Money::from_cents(50).calculate_tax(rate).cents(), 4);
    /// // $1.50 × 8% = $0.12
    /// assert_eq!(Money::from_cents(150).calculate_tax(rate).cents(), 12);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// US-dollar rendering, e.g. `$7.56`.
///
/// ## Note
/// Core logic never formats. This exists for logs and for the CLI boundary.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
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
        Money(self.0 + other.0)
    }
}

/// Summing prices of the current selections.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(7, 0).cents(), 700);
        assert_eq!(Money::from_major_minor(0, 50).cents(), 50);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(756).to_string(), "$7.56");
        assert_eq!(Money::from_cents(50).to_string(), "$0.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let subtotal = Money::from_cents(700) + Money::from_cents(300);
        assert_eq!(subtotal.cents(), 1000);
        assert_eq!(Money::zero() + subtotal, subtotal);
    }

    #[test]
    fn test_sum_of_prices() {
        let prices = [Money::from_cents(700), Money::from_cents(300), Money::from_cents(50)];
        let owned: Money = prices.iter().copied().sum();
        let borrowed: Money = prices.iter().sum();
        assert_eq!(owned.cents(), 1050);
        assert_eq!(owned, borrowed);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_at_default_rate() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(Money::from_cents(700).calculate_tax(rate).cents(), 56);
        assert_eq!(Money::from_cents(1000).calculate_tax(rate).cents(), 80);
        assert_eq!(Money::from_cents(800).calculate_tax(rate).cents(), 64);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 25 cents × 2% = 0.5 cents → 1 cent
        assert_eq!(Money::from_cents(25).calculate_tax(TaxRate::from_bps(200)).cents(), 1);

        // 6 cents × 8% = 0.48 → 0, 7 cents × 8% = 0.56 → 1
        let rate = TaxRate::from_bps(800);
        assert_eq!(Money::from_cents(6).calculate_tax(rate).cents(), 0);
        assert_eq!(Money::from_cents(7).calculate_tax(rate).cents(), 1);
    }

    #[test]
    fn test_zero_rate_has_no_tax() {
        let tax = Money::from_cents(12345).calculate_tax(TaxRate::zero());
        assert!(tax.is_zero());
    }
}
