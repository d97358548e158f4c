//! # Domain Types
//!
//! Core domain entities used throughout Loja.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  bps (u32)      │       │
//! │  │  name           │   │  name           │   │  1000 = 10%     │       │
//! │  │  price (Money)  │   │  email          │   └─────────────────┘       │
//! │  │  category       │   │  tax_id (CPF)   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Entities are immutable after construction and shared through Arc.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_customer_name, validate_email, validate_product_name};
use crate::MAX_UNIT_PRICE;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1500 bps = 0.15).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: u32,
    name: String,
    price: Money,
    category: String,
}

impl Product {
    /// Creates a product.
    ///
    /// ## Errors
    /// - `InvalidArgument(MustBePositive)` when `price <= 0`
    /// - `InvalidArgument(TooLarge)` when `price > MAX_UNIT_PRICE`
    /// - `InvalidArgument(Required)` when `name` is blank
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::{Money, Product};
    ///
    /// assert!(Product::new(1, "Notebook", Money::from_major(3000), "Eletronico").is_ok());
    /// assert!(Product::new(2, "Brinde", Money::zero(), "Promo").is_err());
    /// ```
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> CoreResult<Self> {
        if !price.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            }
            .into());
        }
        if price > Money::from_major(MAX_UNIT_PRICE) {
            return Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: MAX_UNIT_PRICE,
            }
            .into());
        }

        let name = name.into();
        validate_product_name(&name)?;

        Ok(Product {
            id,
            name,
            price,
            category: category.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A store customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: u32,
    name: String,
    email: String,
    /// Taxpayer registration (CPF). Stored as given; not validated.
    tax_id: String,
}

impl Customer {
    /// Creates a customer.
    ///
    /// ## Errors
    /// - `InvalidArgument(Required)` when `name` is blank
    /// - `InvalidArgument(InvalidFormat)` when a non-empty `email` lacks `@`
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> CoreResult<Self> {
        let name = name.into();
        let email = email.into();
        validate_customer_name(&name)?;
        validate_email(&email)?;

        Ok(Customer {
            id,
            name,
            email,
            tax_id: tax_id.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_rate_fraction() {
        assert_eq!(DiscountRate::from_bps(1000).as_fraction(), dec!(0.10));
        assert_eq!(DiscountRate::from_bps(1500).as_fraction(), dec!(0.15));
        assert_eq!(DiscountRate::default().bps(), 0);
    }

    #[test]
    fn test_product_requires_positive_price() {
        for price in [Money::zero(), Money::from_major(-1), Money::from_decimal(dec!(-0.01))] {
            let err = Product::new(1, "Notebook", price, "Eletronico").unwrap_err();
            assert!(matches!(
                err,
                CoreError::InvalidArgument(ValidationError::MustBePositive { ref field }) if field == "price"
            ));
        }

        for price in [Money::from_decimal(dec!(0.01)), Money::from_major(1), Money::from_major(3000)] {
            let product = Product::new(1, "Notebook", price, "Eletronico").unwrap();
            assert_eq!(product.price(), price);
        }
    }

    #[test]
    fn test_product_price_upper_bound() {
        let at_limit = Money::from_major(MAX_UNIT_PRICE);
        assert!(Product::new(1, "Servidor", at_limit, "Eletronico").is_ok());

        for price in [
            at_limit + Money::from_minor(1),
            Money::from_decimal(Decimal::MAX),
        ] {
            let err = Product::new(1, "Servidor", price, "Eletronico").unwrap_err();
            assert!(matches!(
                err,
                CoreError::InvalidArgument(ValidationError::TooLarge { ref field, max })
                    if field == "price" && max == MAX_UNIT_PRICE
            ));
        }
    }

    #[test]
    fn test_product_rejects_blank_name() {
        assert!(Product::new(1, "   ", Money::from_major(10), "Eletronico").is_err());
    }

    #[test]
    fn test_product_accessors() {
        let product = Product::new(3, "HD Externo", Money::from_major(500), "Eletronico").unwrap();
        assert_eq!(product.id(), 3);
        assert_eq!(product.name(), "HD Externo");
        assert_eq!(product.category(), "Eletronico");
    }

    #[test]
    fn test_customer() {
        let maria = Customer::new(1, "Maria", "maria@gmail.com", "12344321").unwrap();
        assert_eq!(maria.id(), 1);
        assert_eq!(maria.name(), "Maria");
        assert_eq!(maria.email(), "maria@gmail.com");
        assert_eq!(maria.tax_id(), "12344321");

        assert!(Customer::new(2, "", "x@y.com", "").is_err());
        assert!(Customer::new(2, "Joao", "not-an-email", "").is_err());
        assert!(Customer::new(2, "Joao", "", "").is_ok());
    }

    #[test]
    fn test_product_serializes_price_as_decimal_string() {
        let product = Product::new(1, "Notebook", Money::from_major(3000), "Eletronico").unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "3000");
        assert_eq!(json["category"], "Eletronico");
    }
}
