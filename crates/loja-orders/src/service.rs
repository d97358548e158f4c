//! # Order Service
//!
//! Facade over the factory, the repository and the activity log.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_order(customer, lines, strategy)                                │
//! │       │                                                                 │
//! │       ├──► OrderFactory::create()      id + total + timestamp           │
//! │       │                                                                 │
//! │       ├──► OrderRepository::save()     append                           │
//! │       │                                                                 │
//! │       └──► ActivityLog::record()       "Pedido criado - ID: .., ..."    │
//! │                                                                         │
//! │  list_orders()                                                          │
//! │       └──► OrderRepository::list_all() ──► Vec<OrderReport>             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use loja_core::{Clock, Customer, DiscountStrategy, Order, OrderLine};
use tracing::debug;

use crate::activity::{ActivityLog, TracingLog};
use crate::error::OrdersResult;
use crate::factory::OrderFactory;
use crate::report::OrderReport;
use crate::repository::{InMemoryOrderRepository, OrderRepository};

/// Creates and reports orders.
#[derive(Debug)]
pub struct OrderService<R: OrderRepository = InMemoryOrderRepository> {
    factory: OrderFactory,
    repository: R,
    log: Arc<dyn ActivityLog>,
}

impl OrderService<InMemoryOrderRepository> {
    /// In-memory service with the wall clock and a tracing activity log.
    pub fn in_memory() -> Self {
        OrderService::new(
            OrderFactory::new(),
            InMemoryOrderRepository::new(),
            Arc::new(TracingLog),
        )
    }

    /// In-memory service with a caller-supplied clock and activity log.
    pub fn in_memory_with(clock: Arc<dyn Clock>, log: Arc<dyn ActivityLog>) -> Self {
        OrderService::new(
            OrderFactory::with_clock(clock),
            InMemoryOrderRepository::new(),
            log,
        )
    }
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(factory: OrderFactory, repository: R, log: Arc<dyn ActivityLog>) -> Self {
        OrderService {
            factory,
            repository,
            log,
        }
    }

    /// Builds, stores and logs a new order.
    pub fn create_order(
        &self,
        customer: Arc<Customer>,
        lines: Vec<OrderLine>,
        strategy: &dyn DiscountStrategy,
    ) -> OrdersResult<Arc<Order>> {
        let order = self.factory.create(customer, lines, strategy);
        let order = self.repository.save(order)?;

        debug!(
            order_id = %order.id(),
            total = %order.total(),
            strategy = strategy.name(),
            "Order created"
        );
        self.log.record(&created_message(&order));

        Ok(order)
    }

    /// Report data for every stored order, oldest first.
    pub fn list_orders(&self) -> OrdersResult<Vec<OrderReport>> {
        let orders = self.repository.list_all()?;
        Ok(orders.iter().map(|o| OrderReport::from(o.as_ref())).collect())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

/// Activity line recorded when an order is created.
pub fn created_message(order: &Order) -> String {
    format!(
        "Pedido criado - ID: {}, Cliente: {}",
        order.id(),
        order.customer().name()
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
