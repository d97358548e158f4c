//! # Order Repository
//!
//! Storage for created orders.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  OrderService                                                          │
//! │       │                                                                 │
//! │       │  repository.save(order)                                        │
//! │       ▼                                                                 │
//! │  OrderRepository (trait)                                               │
//! │  ├── save(&self, order)        append, no dedup                        │
//! │  ├── list_all(&self)           snapshot, oldest first                  │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryOrderRepository  ── Mutex<Vec<Arc<Order>>>                   │
//! │                                                                         │
//! │  Orders are never updated, reordered or removed once saved.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use loja_core::{Order, OrderId};
use tracing::debug;

use crate::error::OrdersResult;

/// Append-only order storage.
pub trait OrderRepository: Send + Sync {
    /// Appends `order`. Ids are not checked for uniqueness.
    fn save(&self, order: Order) -> OrdersResult<Arc<Order>>;

    /// All saved orders in insertion order. Empty before the first save.
    fn list_all(&self) -> OrdersResult<Vec<Arc<Order>>>;

    /// First saved order with `id`, if any.
    fn get_by_id(&self, id: OrderId) -> OrdersResult<Option<Arc<Order>>>;

    /// Number of saved orders.
    fn count(&self) -> OrdersResult<usize>;
}

/// Process-lifetime order storage.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Arc<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Storage is append-only, so a poisoned lock still guards a consistent Vec.
    fn orders(&self) -> MutexGuard<'_, Vec<Arc<Order>>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: Order) -> OrdersResult<Arc<Order>> {
        let order = Arc::new(order);
        let mut orders = self.orders();
        orders.push(Arc::clone(&order));
        debug!(order_id = %order.id(), stored = orders.len(), "Order saved");
        Ok(order)
    }

    fn list_all(&self) -> OrdersResult<Vec<Arc<Order>>> {
        Ok(self.orders().clone())
    }

    fn get_by_id(&self, id: OrderId) -> OrdersResult<Option<Arc<Order>>> {
        Ok(self.orders().iter().find(|o| o.id() == id).cloned())
    }

    fn count(&self) -> OrdersResult<usize> {
        Ok(self.orders().len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use loja_core::{Customer, FixedClock, NoDiscount};

    fn order(id: u64) -> Order {
        let customer = Arc::new(Customer::new(1, "Maria", "", "").unwrap());
        Order::new(
            OrderId::new(id),
            customer,
            Vec::new(),
            &NoDiscount,
            &FixedClock::epoch(),
        )
    }

    #[test]
    fn test_empty_before_any_save() {
        let repo = InMemoryOrderRepository::new();
        assert!(repo.list_all().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_id(OrderId::FIRST).unwrap().is_none());
    }

    #[test]
    fn test_list_all_preserves_save_order() {
        let repo = InMemoryOrderRepository::new();
        for id in [3, 1, 2] {
            repo.save(order(id)).unwrap();
        }

        let ids: Vec<u64> = repo
            .list_all()
            .unwrap()
            .iter()
            .map(|o| o.id().value())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let repo = InMemoryOrderRepository::new();
        repo.save(order(1)).unwrap();
        repo.save(order(1)).unwrap();
        assert_eq!(repo.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached_from_storage() {
        let repo = InMemoryOrderRepository::new();
        repo.save(order(1)).unwrap();

        let mut snapshot = repo.list_all().unwrap();
        snapshot.clear();
        repo.save(order(2)).unwrap();

        assert!(snapshot.is_empty());
        assert_eq!(repo.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let repo = InMemoryOrderRepository::new();
        let saved = repo.save(order(7)).unwrap();
        let found = repo.get_by_id(OrderId::new(7)).unwrap().unwrap();
        assert!(Arc::ptr_eq(&saved, &found));
    }
}
