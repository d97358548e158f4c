//! # Order Factory
//!
//! Stamps sequential ids on new orders.
//!
//! ## Id Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderFactory::create()                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock(OrderIdSequence) ──► id = next                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order::new(id, ...)      ◄── total computed here, clock read here      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  next = id + 1 ──► unlock                                               │
//! │                                                                         │
//! │  The lock spans construct-and-increment, so ids are unique and          │
//! │  strictly increasing in creation order, even across threads.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use loja_core::{Clock, Customer, DiscountStrategy, Order, OrderId, OrderLine, SystemClock};
use tracing::debug;

// =============================================================================
// Id Sequence
// =============================================================================

/// Monotonic order id counter. One per factory, never global.
#[derive(Debug)]
pub struct OrderIdSequence {
    next: Mutex<OrderId>,
}

impl OrderIdSequence {
    /// Sequence whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(OrderId::FIRST)
    }

    pub fn starting_at(first: OrderId) -> Self {
        OrderIdSequence {
            next: Mutex::new(first),
        }
    }

    /// The id the next call will issue.
    pub fn peek(&self) -> OrderId {
        *self.next.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues the next id.
    pub fn next_id(&self) -> OrderId {
        self.issue_with(|id| id)
    }

    /// Runs `build` with the next id while holding the lock, then advances.
    ///
    /// A poisoned lock is recovered: the counter is a plain value and is
    /// only advanced after `build` returns.
    pub fn issue_with<T>(&self, build: impl FnOnce(OrderId) -> T) -> T {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let id = *next;
        let built = build(id);
        *next = id.next();
        built
    }
}

impl Default for OrderIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Builds orders with sequential ids and clock-supplied timestamps.
#[derive(Debug)]
pub struct OrderFactory {
    sequence: OrderIdSequence,
    clock: Arc<dyn Clock>,
}

impl OrderFactory {
    /// Factory using the wall clock, ids from 1.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_parts(OrderIdSequence::new(), clock)
    }

    pub fn with_parts(sequence: OrderIdSequence, clock: Arc<dyn Clock>) -> Self {
        OrderFactory { sequence, clock }
    }

    /// Builds the next order. Every call consumes one id.
    pub fn create(
        &self,
        customer: Arc<Customer>,
        lines: Vec<OrderLine>,
        strategy: &dyn DiscountStrategy,
    ) -> Order {
        self.sequence.issue_with(|id| {
            debug!(
                order_id = %id,
                lines = lines.len(),
                strategy = strategy.name(),
                "Building order"
            );
            Order::new(id, customer, lines, strategy, self.clock.as_ref())
        })
    }

    /// The id the next order will receive.
    pub fn next_id(&self) -> OrderId {
        self.sequence.peek()
    }
}

impl Default for OrderFactory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use loja_core::{FixedClock, Money, NoDiscount, Product};
    use std::collections::HashSet;
    use std::thread;

    fn maria() -> Arc<Customer> {
        Arc::new(Customer::new(1, "Maria", "maria@gmail.com", "12344321").unwrap())
    }

    fn one_line() -> Vec<OrderLine> {
        let teclado =
            Arc::new(Product::new(2, "Teclado", Money::from_major(200), "Periferico").unwrap());
        vec![OrderLine::new(teclado, 1).unwrap()]
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let sequence = OrderIdSequence::new();
        assert_eq!(sequence.peek(), OrderId::new(1));
        assert_eq!(sequence.next_id(), OrderId::new(1));
        assert_eq!(sequence.next_id(), OrderId::new(2));
        assert_eq!(sequence.peek(), OrderId::new(3));
    }

    #[test]
    fn test_factory_ids_strictly_increase() {
        let factory = OrderFactory::with_clock(Arc::new(FixedClock::epoch()));
        let ids: Vec<u64> = (0..5)
            .map(|_| factory.create(maria(), one_line(), &NoDiscount).id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(factory.next_id(), OrderId::new(6));
    }

    #[test]
    fn test_factories_do_not_share_counters() {
        let a = OrderFactory::new();
        let b = OrderFactory::new();
        assert_eq!(a.create(maria(), one_line(), &NoDiscount).id(), OrderId::FIRST);
        assert_eq!(b.create(maria(), one_line(), &NoDiscount).id(), OrderId::FIRST);
    }

    #[test]
    fn test_factory_uses_injected_clock() {
        let clock = FixedClock::at(2024, 1, 2, 3, 4, 5).unwrap();
        let factory = OrderFactory::with_clock(Arc::new(clock));
        let order = factory.create(maria(), one_line(), &NoDiscount);
        assert_eq!(order.created_at(), clock.now());
    }

    #[test]
    fn test_custom_starting_id() {
        let factory = OrderFactory::with_parts(
            OrderIdSequence::starting_at(OrderId::new(100)),
            Arc::new(FixedClock::epoch()),
        );
        assert_eq!(factory.create(maria(), one_line(), &NoDiscount).id().value(), 100);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let factory = Arc::new(OrderFactory::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let factory = Arc::clone(&factory);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| factory.create(maria(), one_line(), &NoDiscount).id().value())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let ids = handle.join().unwrap();
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for id in ids {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 400);
        assert_eq!(seen.iter().min(), Some(&1));
        assert_eq!(seen.iter().max(), Some(&400));
    }
}
