//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Percentage discounts produce fractions of a cent:                      │
//! │    15% of R$ 0.33 = R$ 0.0495                                           │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, never rounded during computation        │
//! │    Subtotals, discounts and totals stay exact.                          │
//! │    Rounding to 2 places happens ONLY when displayed.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loja_core::money::Money;
//!
//! let price = Money::from_major(3000);          // R$ 3000.00
//! let line = price.multiply_quantity(3);         // R$ 9000.00
//! let total = line + Money::from_minor(1099);    // R$ 9010.99
//! assert_eq!(total.to_string(), "R$ 9010.99");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::DiscountRate;

/// Decimal places shown when money is displayed.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for intermediate differences
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Derives**: serde support (serialized as a decimal string)
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► OrderLine.subtotal() ──► discount ──► line net      │
/// │                                                             │           │
/// │                                   Order.total ◄── Σ ────────┘           │
/// │                                       │                                 │
/// │                                       └──► "R$ 4275.00" in the report   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let price = Money::from_major(500);
    /// assert_eq!(price.to_string(), "R$ 500.00");
    /// ```
    #[inline]
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Creates a Money value from minor units (centavos).
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.to_string(), "R$ 10.99");
    /// ```
    #[inline]
    pub fn from_minor(minor: i64) -> Self {
        Money(Decimal::new(minor, 2))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity. Exact, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let unit_price = Money::from_major(500);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_major(1500));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns `rate` percent of this amount. Exact, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    /// use loja_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_major(1500);
    /// let discount = subtotal.percentage(DiscountRate::from_bps(1500)); // 15%
    /// assert_eq!(discount, Money::from_major(225));
    /// ```
    pub fn percentage(&self, rate: DiscountRate) -> Money {
        Money(self.0 * rate.as_fraction())
    }

    /// Restricts the value to `[min, max]`.
    pub fn clamp_between(self, min: Money, max: Money) -> Money {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Rounds to two decimal places (midpoint away from zero) for display.
    pub fn rounded_for_display(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_DECIMALS);
        rounded
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `R$ 1234.50`, always with two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}", self.rounded_for_display())
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_major(10).amount(), dec!(10));
        assert_eq!(Money::from_minor(1099).amount(), dec!(10.99));
        assert_eq!(Money::from_decimal(dec!(0.0495)).amount(), dec!(0.0495));
    }

    #[test]
    fn test_display_rounds_only_at_the_edge() {
        assert_eq!(Money::from_major(3000).to_string(), "R$ 3000.00");
        assert_eq!(Money::from_minor(550).to_string(), "R$ 5.50");
        assert_eq!(Money::zero().to_string(), "R$ 0.00");
        assert_eq!(Money::from_decimal(dec!(0.0495)).to_string(), "R$ 0.05");
        assert_eq!(Money::from_decimal(dec!(2.125)).to_string(), "R$ 2.13");
        assert_eq!(Money::from_decimal(dec!(-5.5)).to_string(), "R$ -5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!(a + b, Money::from_major(15));
        assert_eq!(a - b, Money::from_major(5));

        let mut c = a;
        c += b;
        c -= Money::from_major(1);
        assert_eq!(c, Money::from_major(14));
    }

    #[test]
    fn test_percentage_is_exact() {
        let amount = Money::from_minor(33);
        let fifteen = amount.percentage(DiscountRate::from_bps(1500));
        assert_eq!(fifteen.amount(), dec!(0.0495));
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_decimal(dec!(2.99));
        assert_eq!(unit_price.multiply_quantity(3).amount(), dec!(8.97));
        assert!(unit_price.multiply_quantity(0).is_zero());
    }

    #[test]
    fn test_clamp_between() {
        let max = Money::from_major(100);
        assert_eq!(Money::from_major(150).clamp_between(Money::zero(), max), max);
        assert_eq!(Money::from_major(-1).clamp_between(Money::zero(), max), Money::zero());
        assert_eq!(Money::from_major(40).clamp_between(Money::zero(), max), Money::from_major(40));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(3000), Money::from_major(1275)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(4275));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_minor(1).is_positive());
        assert!(Money::from_minor(-1).is_negative());
    }
}
