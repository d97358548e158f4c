//! # loja-core: Pure Business Logic for Loja
//!
//! This crate is the **heart** of Loja. It contains the order and discount
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Loja Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/loja-demo                               │   │
//! │  │    config ──► seed catalogue ──► create orders ──► print       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    loja-orders                                  │   │
//! │  │    OrderService, OrderFactory, OrderRepository, reports        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loja-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ discount  │  │   order   │  │   │
//! │  │   │  Product  │  │   Money   │  │ Strategy  │  │ OrderLine │  │   │
//! │  │   │ Customer  │  │  (exact)  │  │  Policy   │  │   Order   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Product, Customer) and `DiscountRate`
//! - [`money`] - Money type backed by an exact decimal
//! - [`discount`] - Discount strategies and runtime policy selection
//! - [`order`] - Order lines and the order aggregate
//! - [`clock`] - Injectable time source for order timestamps
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use loja_core::{Customer, FixedClock, Money, Order, OrderId, OrderLine, Product};
//! use loja_core::discount::QuantityDiscount;
//!
//! let notebook = Arc::new(Product::new(1, "Notebook", Money::from_major(3000), "Eletronico").unwrap());
//! let hd = Arc::new(Product::new(3, "HD Externo", Money::from_major(500), "Eletronico").unwrap());
//! let maria = Arc::new(Customer::new(1, "Maria", "maria@gmail.com", "12344321").unwrap());
//!
//! let lines = vec![
//!     OrderLine::new(notebook, 1).unwrap(),
//!     OrderLine::new(hd, 3).unwrap(),
//! ];
//!
//! let order = Order::new(OrderId::new(1), maria, lines, &QuantityDiscount::default(), &FixedClock::epoch());
//! assert_eq!(order.total(), Money::from_major(4275));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use discount::{
    applied_discount, CategoryDiscount, DiscountPolicy, DiscountStrategy, NoDiscount,
    QuantityDiscount,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderId, OrderLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category that qualifies for the category discount.
pub const ELECTRONICS_CATEGORY: &str = "Eletronico";

/// Category discount rate in basis points (10%).
pub const CATEGORY_DISCOUNT_BPS: u32 = 1000;

/// Quantity discount rate in basis points (15%).
pub const QUANTITY_DISCOUNT_BPS: u32 = 1500;

/// Minimum quantity on a single line for the quantity discount to apply.
pub const QUANTITY_DISCOUNT_THRESHOLD: u32 = 3;

/// Maximum quantity of a single product on an order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Maximum unit price of a product, in whole currency units.
///
/// Keeps `price × MAX_LINE_QUANTITY` summed over any realistic number of
/// lines far below the range of `Decimal`, so order arithmetic cannot overflow.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;
