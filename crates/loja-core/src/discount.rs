//! # Discount Strategies
//!
//! Pluggable rules that compute how much to take off a single order line.
//!
//! ## Strategy Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Discount Strategies                                │
//! │                                                                         │
//! │  NoDiscount          ──► always 0                                       │
//! │  CategoryDiscount    ──► 10% of subtotal when category == "Eletronico"  │
//! │  QuantityDiscount    ──► 15% of subtotal when quantity >= 3             │
//! │                                                                         │
//! │  Raw strategy value                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  applied_discount() ──► clamped into [0, line subtotal]                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  line net = subtotal - applied discount  (never negative)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Strategies are pure: the same line always yields the same discount.
//! [`DiscountPolicy`] is the tagged form used when the strategy is chosen
//! at runtime (configuration, JSON).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ValidationError;
use crate::money::Money;
use crate::order::OrderLine;
use crate::types::DiscountRate;
use crate::{
    CATEGORY_DISCOUNT_BPS, ELECTRONICS_CATEGORY, QUANTITY_DISCOUNT_BPS,
    QUANTITY_DISCOUNT_THRESHOLD,
};

// =============================================================================
// Strategy Trait
// =============================================================================

/// Computes the discount for one order line.
///
/// Implementations should return a value in `[0, line.subtotal()]`.
/// Callers go through [`applied_discount`], which enforces that range.
pub trait DiscountStrategy: Send + Sync + fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Raw discount for `line`.
    fn compute_discount(&self, line: &OrderLine) -> Money;
}

/// Discount actually subtracted from `line`: the strategy's value clamped
/// into `[0, subtotal]`.
///
/// A strategy returning a value outside that range breaks its contract; the
/// value is clamped and the violation is logged at `warn`.
pub fn applied_discount(strategy: &dyn DiscountStrategy, line: &OrderLine) -> Money {
    let subtotal = line.subtotal();
    let raw = strategy.compute_discount(line);
    let clamped = raw.clamp_between(Money::zero(), subtotal);

    if clamped != raw {
        warn!(
            strategy = strategy.name(),
            product = line.product().name(),
            raw = %raw.amount(),
            subtotal = %subtotal.amount(),
            "Discount outside [0, subtotal], clamped"
        );
    }

    clamped
}

// =============================================================================
// No Discount
// =============================================================================

/// Never discounts anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn name(&self) -> &str {
        "none"
    }

    fn compute_discount(&self, _line: &OrderLine) -> Money {
        Money::zero()
    }
}

// =============================================================================
// Category Discount
// =============================================================================

/// A percentage off lines whose product belongs to one category.
///
/// The discount is `subtotal × rate`, never `subtotal + rate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDiscount {
    category: String,
    rate: DiscountRate,
}

impl CategoryDiscount {
    pub fn new(category: impl Into<String>, rate: DiscountRate) -> Self {
        CategoryDiscount {
            category: category.into(),
            rate,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

/// 10% off electronics.
impl Default for CategoryDiscount {
    fn default() -> Self {
        CategoryDiscount::new(
            ELECTRONICS_CATEGORY,
            DiscountRate::from_bps(CATEGORY_DISCOUNT_BPS),
        )
    }
}

impl DiscountStrategy for CategoryDiscount {
    fn name(&self) -> &str {
        "category"
    }

    fn compute_discount(&self, line: &OrderLine) -> Money {
        if line.product().category() == self.category {
            line.subtotal().percentage(self.rate)
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Quantity Discount
// =============================================================================

/// A percentage off lines ordering at least `min_quantity` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityDiscount {
    min_quantity: u32,
    rate: DiscountRate,
}

impl QuantityDiscount {
    pub fn new(min_quantity: u32, rate: DiscountRate) -> Self {
        QuantityDiscount { min_quantity, rate }
    }

    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

/// 15% off lines with 3 or more units.
impl Default for QuantityDiscount {
    fn default() -> Self {
        QuantityDiscount::new(
            QUANTITY_DISCOUNT_THRESHOLD,
            DiscountRate::from_bps(QUANTITY_DISCOUNT_BPS),
        )
    }
}

impl DiscountStrategy for QuantityDiscount {
    fn name(&self) -> &str {
        "quantity"
    }

    fn compute_discount(&self, line: &OrderLine) -> Money {
        if line.quantity() >= self.min_quantity {
            line.subtotal().percentage(self.rate)
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// Runtime-selectable discount policy using the default store rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// No discount.
    #[default]
    None,
    /// 10% off electronics.
    Category,
    /// 15% off lines with 3+ units.
    Quantity,
}

impl DiscountPolicy {
    pub const ALL: [DiscountPolicy; 3] = [
        DiscountPolicy::None,
        DiscountPolicy::Category,
        DiscountPolicy::Quantity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountPolicy::None => "none",
            DiscountPolicy::Category => "category",
            DiscountPolicy::Quantity => "quantity",
        }
    }

    /// The concrete strategy this policy selects, with the default store rules.
    pub fn strategy(&self) -> Box<dyn DiscountStrategy> {
        match self {
            DiscountPolicy::None => Box::new(NoDiscount),
            DiscountPolicy::Category => Box::new(CategoryDiscount::default()),
            DiscountPolicy::Quantity => Box::new(QuantityDiscount::default()),
        }
    }
}

impl DiscountStrategy for DiscountPolicy {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn compute_discount(&self, line: &OrderLine) -> Money {
        match self {
            DiscountPolicy::None => NoDiscount.compute_discount(line),
            DiscountPolicy::Category => CategoryDiscount::default().compute_discount(line),
            DiscountPolicy::Quantity => QuantityDiscount::default().compute_discount(line),
        }
    }
}

impl fmt::Display for DiscountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DiscountPolicy::None),
            "category" => Ok(DiscountPolicy::Category),
            "quantity" => Ok(DiscountPolicy::Quantity),
            other => Err(ValidationError::InvalidFormat {
                field: "discount policy".to_string(),
                reason: format!("'{other}' is not one of none, category, quantity"),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
