//! # Orders
//!
//! Order lines and the order aggregate.
//!
//! ## Total Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order::new(id, customer, lines, strategy, clock)    │
//! │                                                                         │
//! │  for each line:                                                         │
//! │      subtotal  = price × quantity                  (exact)              │
//! │      discount  = applied_discount(strategy, line)  (0 ≤ d ≤ subtotal)   │
//! │      net       = subtotal - discount                                    │
//! │                                                                         │
//! │  total      = Σ net          ◄── computed ONCE, never recomputed        │
//! │  created_at = clock.now()    ◄── injected, deterministic in tests       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::clock::Clock;
use crate::discount::{applied_discount, DiscountStrategy};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Customer, Product};
use crate::validation::validate_quantity;

// =============================================================================
// Order Id
// =============================================================================

/// Sequential order identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub const FIRST: OrderId = OrderId(1);

    #[inline]
    pub const fn new(value: u64) -> Self {
        OrderId(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id issued after this one.
    #[inline]
    pub const fn next(&self) -> Self {
        OrderId(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One product-and-quantity entry within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    product: Arc<Product>,
    quantity: u32,
}

impl OrderLine {
    /// Creates an order line.
    ///
    /// ## Errors
    /// `InvalidArgument` when `quantity` is 0 or above `MAX_LINE_QUANTITY`.
    pub fn new(product: Arc<Product>, quantity: u32) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        Ok(OrderLine { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity`, exact.
    pub fn subtotal(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's order. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    customer: Arc<Customer>,
    lines: Vec<OrderLine>,
    /// Applied discount per line, parallel to `lines`.
    discounts: Vec<Money>,
    created_at: DateTime<Utc>,
    discount_total: Money,
    total: Money,
}

impl Order {
    /// Builds an order, applying `strategy` to every line.
    ///
    /// An order with no lines is allowed and totals zero.
    pub fn new(
        id: OrderId,
        customer: Arc<Customer>,
        lines: Vec<OrderLine>,
        strategy: &dyn DiscountStrategy,
        clock: &dyn Clock,
    ) -> Self {
        let mut total = Money::zero();
        let mut discount_total = Money::zero();
        let mut discounts = Vec::with_capacity(lines.len());

        for line in &lines {
            let discount = applied_discount(strategy, line);
            total += line.subtotal() - discount;
            discount_total += discount;
            discounts.push(discount);
        }

        Order {
            id,
            customer,
            lines,
            discounts,
            created_at: clock.now(),
            discount_total,
            total,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Lines in the order they were given.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Each line with the discount applied to it.
    pub fn lines_with_discounts(&self) -> impl Iterator<Item = (&OrderLine, Money)> + '_ {
        self.lines.iter().zip(self.discounts.iter().copied())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of line subtotals before discount.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Sum of discounts applied when the order was built.
    pub fn discount_total(&self) -> Money {
        self.discount_total
    }

    /// Total with discounts, fixed at construction.
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::discount::{CategoryDiscount, NoDiscount, QuantityDiscount};
    use rust_decimal_macros::dec;

    fn product(id: u32, name: &str, price: i64, category: &str) -> Arc<Product> {
        Arc::new(Product::new(id, name, Money::from_major(price), category).unwrap())
    }

    fn maria() -> Arc<Customer> {
        Arc::new(Customer::new(1, "Maria", "maria@gmail.com", "12344321").unwrap())
    }

    fn sample_lines() -> Vec<OrderLine> {
        vec![
            OrderLine::new(product(1, "Notebook", 3000, "Eletronico"), 1).unwrap(),
            OrderLine::new(product(3, "HD Externo", 500, "Eletronico"), 3).unwrap(),
        ]
    }

    #[test]
    fn test_order_line_subtotal() {
        let lines = sample_lines();
        assert_eq!(lines[0].subtotal(), Money::from_major(3000));
        assert_eq!(lines[1].subtotal(), Money::from_major(1500));

        let odd = Arc::new(
            Product::new(9, "Cabo", Money::from_decimal(dec!(19.99)), "Periferico").unwrap(),
        );
        assert_eq!(OrderLine::new(odd, 7).unwrap().subtotal().amount(), dec!(139.93));
    }

    #[test]
    fn test_order_line_rejects_zero_quantity() {
        assert!(OrderLine::new(product(1, "Notebook", 3000, "Eletronico"), 0).is_err());
        assert!(OrderLine::new(product(1, "Notebook", 3000, "Eletronico"), 1000).is_err());
    }

    #[test]
    fn test_total_with_quantity_discount() {
        let order = Order::new(
            OrderId::FIRST,
            maria(),
            sample_lines(),
            &QuantityDiscount::default(),
            &FixedClock::epoch(),
        );
        assert_eq!(order.total().amount(), dec!(4275));
        assert_eq!(order.discount_total(), Money::from_major(225));

        let discounts: Vec<Money> = order.lines_with_discounts().map(|(_, d)| d).collect();
        assert_eq!(discounts, vec![Money::zero(), Money::from_major(225)]);
        assert_eq!(order.total().to_string(), "R$ 4275.00");
    }

    #[test]
    fn test_total_with_category_discount() {
        let order = Order::new(
            OrderId::FIRST,
            maria(),
            sample_lines(),
            &CategoryDiscount::default(),
            &FixedClock::epoch(),
        );
        assert_eq!(order.total().amount(), dec!(4050));
        assert_eq!(order.discount_total(), Money::from_major(450));
    }

    #[test]
    fn test_total_matches_independent_recomputation() {
        let strategies: [&dyn DiscountStrategy; 3] = [
            &NoDiscount,
            &CategoryDiscount::default(),
            &QuantityDiscount::default(),
        ];
        let lines = vec![
            OrderLine::new(product(1, "Notebook", 3000, "Eletronico"), 1).unwrap(),
            OrderLine::new(product(2, "Teclado", 200, "Periferico"), 4).unwrap(),
            OrderLine::new(product(3, "HD Externo", 500, "Eletronico"), 3).unwrap(),
        ];

        for strategy in strategies {
            let order = Order::new(
                OrderId::FIRST,
                maria(),
                lines.clone(),
                strategy,
                &FixedClock::epoch(),
            );
            let expected: Money = lines
                .iter()
                .map(|l| l.subtotal() - strategy.compute_discount(l))
                .sum();
            assert_eq!(order.total(), expected, "strategy {}", strategy.name());
            assert_eq!(order.subtotal() - order.discount_total(), order.total());
        }
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new(
            OrderId::FIRST,
            maria(),
            Vec::new(),
            &QuantityDiscount::default(),
            &FixedClock::epoch(),
        );
        assert!(order.total().is_zero());
        assert!(order.lines().is_empty());
    }

    #[test]
    fn test_largest_valid_lines_do_not_overflow() {
        let priciest = product(9, "Servidor", crate::MAX_UNIT_PRICE, "Eletronico");
        let lines: Vec<OrderLine> = (0..100)
            .map(|_| OrderLine::new(Arc::clone(&priciest), crate::MAX_LINE_QUANTITY).unwrap())
            .collect();

        let order = Order::new(
            OrderId::FIRST,
            maria(),
            lines,
            &QuantityDiscount::default(),
            &FixedClock::epoch(),
        );
        // 100 × 999 × 1e9 × 0.85
        assert_eq!(order.total().amount(), dec!(84915000000000));
    }

    #[test]
    fn test_created_at_comes_from_clock() {
        let clock = FixedClock::at(2024, 3, 15, 14, 30, 0).unwrap();
        let order = Order::new(OrderId::new(7), maria(), sample_lines(), &NoDiscount, &clock);
        assert_eq!(order.created_at(), clock.now());
        assert_eq!(order.id().value(), 7);
        assert_eq!(order.customer().name(), "Maria");
        assert_eq!(order.lines()[1].product().name(), "HD Externo");
    }

    #[test]
    fn test_order_id_sequence_helpers() {
        assert_eq!(OrderId::FIRST.value(), 1);
        assert_eq!(OrderId::FIRST.next(), OrderId::new(2));
        assert_eq!(OrderId::new(42).to_string(), "42");
    }
}
